//! graph-beta-models - inspect Microsoft Graph beta payloads
//!
//! Decodes JSON through the typed models to show:
//! - Which concrete type an `@odata.type` resolves to
//! - The payload as the models re-serialize it
//! - Enum wire strings and integer codes

mod config;
mod export;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use graph_beta_models::models::*;
use graph_beta_models::serialization::{
    Family, JSON_CONTENT_TYPE, JsonSerializationWriterFactory, Parsable,
    SerializationWriterFactory, deserialize_from_json, deserialize_from_json_lenient,
};

use crate::config::Config;
use crate::export::{EnumTable, ExportFormat, export_document, export_enum_table};

/// graph-beta-models - Graph beta payload inspector
#[derive(Parser, Debug)]
#[command(name = "graph-beta-models")]
#[command(about = "Decode and inspect Microsoft Graph beta model payloads")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a JSON payload through a model family
    Inspect {
        /// JSON file to decode, `-` for stdin
        file: PathBuf,

        /// Family to decode with (see `families`)
        #[arg(short, long, env = "GRAPH_MODELS_FAMILY")]
        family: Option<String>,

        /// Write the re-serialized payload here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List an enum's values, or parse one value
    Enum {
        /// Enum type name, e.g. EnrollmentState. Omit to list enum types.
        name: Option<String>,

        /// Wire string to parse
        value: Option<String>,

        /// Export the value table (.csv or .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List families and the discriminators they resolve
    Families,

    /// Show or update the saved configuration
    Config {
        #[arg(long)]
        pretty: Option<bool>,

        #[arg(long)]
        default_family: Option<String>,

        #[arg(long)]
        sanitize_invalid_json: Option<bool>,
    },
}

fn main() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_deref().unwrap_or("warn")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Inspect {
            file,
            family,
            output,
        } => {
            let family = family.unwrap_or_else(|| config.default_family.clone());
            let content = read_input(&file)?;
            let inspection = inspect(&family, &content, &config)?;

            eprintln!("@odata.type: {}", inspection.odata_type);
            match output {
                Some(path) => {
                    let written = export_document(&inspection.document, &path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("Written to {}", written);
                }
                None => println!("{}", String::from_utf8_lossy(&inspection.document)),
            }
        }
        Command::Enum {
            name: None, ..
        } => {
            for table in enum_tables() {
                println!("{}", table.type_name);
            }
        }
        Command::Enum {
            name: Some(name),
            value,
            output,
        } => {
            let table = enum_tables()
                .into_iter()
                .find(|table| table.type_name.eq_ignore_ascii_case(&name))
                .with_context(|| format!("Unknown enum type '{}'", name))?;

            match value {
                Some(value) => println!("{}", table.code_of(&value)?),
                None => {
                    for (value, code) in &table.rows {
                        println!("{:>4}  {}", code, value);
                    }
                }
            }

            if let Some(path) = output {
                let written = export_enum_table(&table, ExportFormat::from_path(&path), &path)?;
                eprintln!("Written to {}", written);
            }
        }
        Command::Families => {
            for (name, discriminators) in families() {
                println!("{}", name);
                for tag in discriminators {
                    println!("    {}", tag);
                }
            }
        }
        Command::Config {
            pretty,
            default_family,
            sanitize_invalid_json,
        } => {
            let mut config = config;
            let changed = pretty.is_some() || default_family.is_some() || sanitize_invalid_json.is_some();

            if let Some(pretty) = pretty {
                config.pretty = pretty;
            }
            if let Some(family) = default_family {
                if !families().iter().any(|(name, _)| *name == family) {
                    bail!("Unknown family '{}'", family);
                }
                config.default_family = family;
            }
            if let Some(sanitize) = sanitize_invalid_json {
                config.sanitize_invalid_json = sanitize;
            }

            if changed {
                let path = config.save().context("Failed to save config")?;
                eprintln!("Saved {}", path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn read_input(file: &Path) -> Result<Vec<u8>> {
    if file.as_os_str() == "-" {
        let mut content = Vec::new();
        io::stdin().read_to_end(&mut content)?;
        return Ok(content);
    }
    std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))
}

/// Outcome of decoding a payload
struct Inspection {
    odata_type: &'static str,
    document: Vec<u8>,
}

fn inspect(family: &str, content: &[u8], config: &Config) -> Result<Inspection> {
    match family {
        "entity" => inspect_as::<EntityKind>(content, config),
        "device-configuration" => inspect_as::<DeviceConfigurationKind>(content, config),
        "apple-vpn-configuration" => inspect_as::<AppleVpnConfigurationKind>(content, config),
        "enrollment-profile" => inspect_as::<EnrollmentProfileKind>(content, config),
        "dep-enrollment-base-profile" => inspect_as::<DepEnrollmentBaseProfileKind>(content, config),
        "setting-instance" => inspect_as::<DeviceManagementSettingInstanceKind>(content, config),
        "base-item" => inspect_as::<BaseItemKind>(content, config),
        "web-part" => inspect_as::<WebPartKind>(content, config),
        other => bail!("Unknown family '{}' (see `families`)", other),
    }
}

fn inspect_as<F: Family + Parsable>(content: &[u8], config: &Config) -> Result<Inspection> {
    let decoded = if config.sanitize_invalid_json {
        deserialize_from_json_lenient(content, F::create_from_discriminator_value)
    } else {
        deserialize_from_json(content, F::create_from_discriminator_value)
    }
    .context("Failed to decode payload")?;

    let Some(value) = decoded else {
        bail!("Payload is null");
    };
    debug!(odata_type = value.odata_type_name(), "decoded payload");

    let factory = JsonSerializationWriterFactory {
        pretty: config.pretty,
    };
    let mut writer = factory.serialization_writer(JSON_CONTENT_TYPE)?;
    writer.write_object_value(None, &value)?;

    Ok(Inspection {
        odata_type: value.odata_type_name(),
        document: writer.serialized_content()?,
    })
}

fn families() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("entity", EntityKind::discriminators()),
        ("device-configuration", DeviceConfigurationKind::discriminators()),
        ("apple-vpn-configuration", AppleVpnConfigurationKind::discriminators()),
        ("enrollment-profile", EnrollmentProfileKind::discriminators()),
        ("dep-enrollment-base-profile", DepEnrollmentBaseProfileKind::discriminators()),
        ("setting-instance", DeviceManagementSettingInstanceKind::discriminators()),
        ("base-item", BaseItemKind::discriminators()),
        ("web-part", WebPartKind::discriminators()),
    ]
}

fn enum_tables() -> Vec<EnumTable> {
    vec![
        EnumTable::of::<AppleVpnConnectionType>(),
        EnumTable::of::<BitLockerEncryptionMethod>(),
        EnumTable::of::<BitLockerRecoveryInformationType>(),
        EnumTable::of::<BodyType>(),
        EnumTable::of::<CallDirection>(),
        EnumTable::of::<CallState>(),
        EnumTable::of::<ConfigurationUsage>(),
        EnumTable::of::<DiscoverySource>(),
        EnumTable::of::<EnrollmentState>(),
        EnumTable::of::<ITunesPairingMode>(),
        EnumTable::of::<LobbyBypassScope>(),
        EnumTable::of::<MeetingCapabilities>(),
        EnumTable::of::<Modality>(),
        EnumTable::of::<OnlineMeetingPresenters>(),
        EnumTable::of::<OnlineMeetingRole>(),
        EnumTable::of::<PageLayoutType>(),
        EnumTable::of::<PagePromotionType>(),
        EnumTable::of::<Platform>(),
        EnumTable::of::<TitleAreaLayoutType>(),
        EnumTable::of::<TitleAreaTextAlignmentType>(),
        EnumTable::of::<VpnAuthenticationMethod>(),
        EnumTable::of::<VpnOnDemandRuleConnectionAction>(),
        EnumTable::of::<VpnProviderType>(),
        EnumTable::of::<ZebraFotaDeploymentState>(),
        EnumTable::of::<ZebraFotaNetworkType>(),
        EnumTable::of::<ZebraFotaScheduleMode>(),
        EnumTable::of::<ZebraFotaUpdateType>(),
    ]
}
