use anyhow::Result;
use graph_beta_models::serialization::GraphEnum;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick the format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }
}

/// Wire strings and integer codes of one enum
pub struct EnumTable {
    pub type_name: &'static str,
    pub rows: Vec<(&'static str, i32)>,
    parse: fn(&str) -> graph_beta_models::Result<i32>,
}

impl EnumTable {
    pub fn of<E: GraphEnum>() -> Self {
        Self {
            type_name: E::TYPE_NAME,
            rows: E::ALL.iter().map(|value| (value.as_str(), value.code())).collect(),
            parse: |raw| E::parse(raw).map(|value| value.code()),
        }
    }

    /// Integer code of a wire string
    pub fn code_of(&self, raw: &str) -> graph_beta_models::Result<i32> {
        (self.parse)(raw)
    }
}

/// Export an enum table to a file
pub fn export_enum_table(table: &EnumTable, format: ExportFormat, path: &Path) -> Result<String> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match format {
        ExportFormat::Csv => export_to_csv(table, path),
        ExportFormat::Json => export_to_json(table, path),
    }
}

/// Write an already encoded document to a file
pub fn export_document(content: &[u8], path: &Path) -> Result<String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(content)?;
    Ok(path.to_string_lossy().to_string())
}

fn export_to_csv(table: &EnumTable, path: &Path) -> Result<String> {
    let mut file = File::create(path)?;

    writeln!(file, "value,code")?;
    for (value, code) in &table.rows {
        writeln!(file, "{},{}", value, code)?;
    }

    Ok(path.to_string_lossy().to_string())
}

fn export_to_json(table: &EnumTable, path: &Path) -> Result<String> {
    let mut file = File::create(path)?;

    let mut values = serde_json::Map::new();
    for (value, code) in &table.rows {
        values.insert(value.to_string(), serde_json::Value::from(*code));
    }
    let output = serde_json::json!({
        "type": table.type_name,
        "values": values,
    });

    let json = serde_json::to_string_pretty(&output)?;
    file.write_all(json.as_bytes())?;

    Ok(path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_models::models::{BodyType, CallDirection};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("out/table.CSV")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out/table.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("table")), ExportFormat::Json);
    }

    #[test]
    fn test_enum_table() {
        let table = EnumTable::of::<CallDirection>();
        assert_eq!(table.type_name, "CallDirection");
        assert_eq!(table.rows, vec![("incoming", 0), ("outgoing", 1)]);
        assert_eq!(table.code_of("outgoing").unwrap(), 1);
        assert!(table.code_of("sideways").is_err());
    }

    #[test]
    fn test_export_csv_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let table = EnumTable::of::<BodyType>();

        let csv = dir.path().join("exports").join("body.csv");
        export_enum_table(&table, ExportFormat::Csv, &csv).unwrap();
        assert_eq!(std::fs::read_to_string(&csv).unwrap(), "value,code\ntext,0\nhtml,1\n");

        let json = dir.path().join("body.json");
        export_enum_table(&table, ExportFormat::Json, &json).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({"type": "BodyType", "values": {"text": 0, "html": 1}})
        );
    }

    #[test]
    fn test_export_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decoded").join("page.json");
        export_document(b"{\"id\":\"1\"}", &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"{\"id\":\"1\"}".to_vec());
    }
}
