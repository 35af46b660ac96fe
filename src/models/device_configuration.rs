//! Device configuration profiles and the Apple VPN profiles built on them

use super::Entity;
use chrono::{DateTime, FixedOffset};

graph_enum! {
    /// VPN Authentication Method.
    pub enum VpnAuthenticationMethod {
        Certificate => "certificate",
        UsernameAndPassword => "usernameAndPassword",
        SharedSecret => "sharedSecret",
        DerivedCredential => "derivedCredential",
        AzureAd => "azureAD",
    }
}

graph_enum! {
    /// Apple VPN connection type.
    pub enum AppleVpnConnectionType {
        CiscoAnyConnect => "ciscoAnyConnect",
        PulseSecure => "pulseSecure",
        F5EdgeClient => "f5EdgeClient",
        DellSonicWallMobileConnect => "dellSonicWallMobileConnect",
        CheckPointCapsuleVpn => "checkPointCapsuleVpn",
        CustomVpn => "customVpn",
        CiscoIpSec => "ciscoIPSec",
        Citrix => "citrix",
        CiscoAnyConnectV2 => "ciscoAnyConnectV2",
        PaloAltoGlobalProtect => "paloAltoGlobalProtect",
        ZscalerPrivateAccess => "zscalerPrivateAccess",
        F5Access2018 => "f5Access2018",
        CitrixSso => "citrixSso",
        PaloAltoGlobalProtectV2 => "paloAltoGlobalProtectV2",
        IkEv2 => "ikEv2",
        AlwaysOn => "alwaysOn",
        MicrosoftTunnel => "microsoftTunnel",
        NetMotionMobility => "netMotionMobility",
        MicrosoftProtect => "microsoftProtect",
    }
}

graph_enum! {
    /// Provider type for per-app VPN.
    pub enum VpnProviderType {
        NotConfigured => "notConfigured",
        AppProxy => "appProxy",
        PacketTunnel => "packetTunnel",
    }
}

graph_enum! {
    /// VPN On-Demand Rule Connection Action.
    pub enum VpnOnDemandRuleConnectionAction {
        Connect => "connect",
        EvaluateConnection => "evaluateConnection",
        Ignore => "ignore",
        Disconnect => "disconnect",
    }
}

graph_model! {
    /// Key value pair for storing custom settings
    pub struct KeyValuePair {
        "name" => name / set_name: String,
        "value" => value / set_value: String,
    }
}

graph_model! {
    /// VPN Server definition.
    pub struct VpnServer {
        "address" => address / set_address: String,
        "description" => description / set_description: String,
        "isDefaultServer" => is_default_server / set_is_default_server: bool,
    }
}

graph_model! {
    /// VPN Proxy Server.
    pub struct VpnProxyServer {
        "address" => address / set_address: String,
        /// Proxy's automatic configuration script url.
        "automaticConfigurationScriptUrl" => automatic_configuration_script_url / set_automatic_configuration_script_url: String,
        "port" => port / set_port: i32,
    }
}

graph_model! {
    /// VPN On-Demand Rule definition.
    pub struct VpnOnDemandRule {
        "action" => action / set_action: VpnOnDemandRuleConnectionAction,
        "dnsSearchDomains" => dns_search_domains / set_dns_search_domains: Vec<String>,
        "dnsServerAddressMatch" => dns_server_address_match / set_dns_server_address_match: Vec<String>,
        "domains" => domains / set_domains: Vec<String>,
        /// A URL to probe. If this URL is successfully fetched without redirection, the rule applies.
        "probeRequiredUrl" => probe_required_url / set_probe_required_url: String,
        "probeUrl" => probe_url / set_probe_url: String,
        /// Network Service Set Identifiers (SSIDs).
        "ssids" => ssids / set_ssids: Vec<String>,
    }
}

graph_model! {
    /// Device Configuration.
    pub struct DeviceConfiguration: Entity {
        "createdDateTime" => created_date_time / set_created_date_time: DateTime<FixedOffset>,
        "description" => description / set_description: String,
        "displayName" => display_name / set_display_name: String,
        "lastModifiedDateTime" => last_modified_date_time / set_last_modified_date_time: DateTime<FixedOffset>,
        /// List of Scope Tags for this Entity instance.
        "roleScopeTagIds" => role_scope_tag_ids / set_role_scope_tag_ids: Vec<String>,
        "supportsScopeTags" => supports_scope_tags / set_supports_scope_tags: bool,
        "version" => version / set_version: i32,
    }
}

graph_model! {
    /// Apple VPN configuration profile.
    pub struct AppleVpnConfiguration: DeviceConfiguration = "#microsoft.graph.appleVpnConfiguration" {
        "associatedDomains" => associated_domains / set_associated_domains: Vec<String>,
        "authenticationMethod" => authentication_method / set_authentication_method: VpnAuthenticationMethod,
        "connectionName" => connection_name / set_connection_name: String,
        "connectionType" => connection_type / set_connection_type: AppleVpnConnectionType,
        /// Custom data when connection type is set to Custom VPN.
        "customKeyValueData" => custom_key_value_data / set_custom_key_value_data: Vec<KeyValuePair>,
        "disableOnDemandUserOverride" => disable_on_demand_user_override / set_disable_on_demand_user_override: bool,
        "disconnectOnIdle" => disconnect_on_idle / set_disconnect_on_idle: bool,
        "disconnectOnIdleTimerInSeconds" => disconnect_on_idle_timer_in_seconds / set_disconnect_on_idle_timer_in_seconds: i32,
        "enablePerApp" => enable_per_app / set_enable_per_app: bool,
        "enableSplitTunneling" => enable_split_tunneling / set_enable_split_tunneling: bool,
        "excludedDomains" => excluded_domains / set_excluded_domains: Vec<String>,
        "identifier" => identifier / set_identifier: String,
        "loginGroupOrDomain" => login_group_or_domain / set_login_group_or_domain: String,
        "onDemandRules" => on_demand_rules / set_on_demand_rules: Vec<VpnOnDemandRule>,
        "optInToDeviceIdSharing" => opt_in_to_device_id_sharing / set_opt_in_to_device_id_sharing: bool,
        "providerType" => provider_type / set_provider_type: VpnProviderType,
        "proxyServer" => proxy_server / set_proxy_server: VpnProxyServer,
        "realm" => realm / set_realm: String,
        "role" => role / set_role: String,
        "safariDomains" => safari_domains / set_safari_domains: Vec<String>,
        "server" => server / set_server: VpnServer,
    }
}

graph_model! {
    /// iOS VPN configuration profile.
    pub struct IosVpnConfiguration: AppleVpnConfiguration = "#microsoft.graph.iosVpnConfiguration" {
        "cloudName" => cloud_name / set_cloud_name: String,
        "excludeList" => exclude_list / set_exclude_list: Vec<String>,
        "microsoftTunnelSiteId" => microsoft_tunnel_site_id / set_microsoft_tunnel_site_id: String,
        "strictEnforcement" => strict_enforcement / set_strict_enforcement: bool,
        "userDomain" => user_domain / set_user_domain: String,
    }
}

graph_model! {
    /// macOS VPN configuration profile.
    pub struct MacOsVpnConfiguration: AppleVpnConfiguration = "#microsoft.graph.macOSVpnConfiguration" {}
}

graph_family! {
    pub enum AppleVpnConfigurationKind {
        base AppleVpnConfiguration = "#microsoft.graph.appleVpnConfiguration";
        variants {
            IosVpnConfiguration = "#microsoft.graph.iosVpnConfiguration",
            MacOsVpnConfiguration = "#microsoft.graph.macOSVpnConfiguration",
        }
        nested {}
    }
}

graph_family! {
    pub enum DeviceConfigurationKind {
        base DeviceConfiguration = "#microsoft.graph.deviceConfiguration";
        variants {}
        nested {
            AppleVpnConfiguration(AppleVpnConfigurationKind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{check_enum, decode, round_trip};
    use crate::serialization::{Family, GraphEnum, Parsable};
    use serde_json::json;

    #[test]
    fn test_enums_round_trip() {
        check_enum::<VpnAuthenticationMethod>();
        check_enum::<AppleVpnConnectionType>();
        check_enum::<VpnProviderType>();
        check_enum::<VpnOnDemandRuleConnectionAction>();

        assert_eq!(VpnAuthenticationMethod::AzureAd.as_str(), "azureAD");
        assert_eq!(AppleVpnConnectionType::CiscoIpSec.code(), 6);
    }

    #[test]
    fn test_new_sets_odata_type() {
        assert_eq!(DeviceConfiguration::new().odata_type(), None);
        assert_eq!(
            AppleVpnConfiguration::new().odata_type().map(String::as_str),
            Some("#microsoft.graph.appleVpnConfiguration")
        );
        assert_eq!(
            MacOsVpnConfiguration::new().odata_type().map(String::as_str),
            Some("#microsoft.graph.macOSVpnConfiguration")
        );
        assert_eq!(VpnServer::new().odata_type(), None);
    }

    #[test]
    fn test_ios_vpn_round_trip() {
        let mut server = VpnServer::new();
        server.set_address(Some("vpn.contoso.com".to_string()));
        server.set_is_default_server(Some(true));

        let mut rule = VpnOnDemandRule::new();
        rule.set_action(Some(VpnOnDemandRuleConnectionAction::EvaluateConnection));
        rule.set_ssids(Some(vec!["corp-wifi".to_string()]));

        let mut pair = KeyValuePair::new();
        pair.set_name(Some("vendor".to_string()));
        pair.set_value(Some("x".to_string()));

        let mut vpn = IosVpnConfiguration::new();
        vpn.set_user_domain(Some("contoso".to_string()));
        vpn.set_strict_enforcement(Some(false));
        let apple = vpn.base_mut();
        apple.set_connection_name(Some("Contoso".to_string()));
        apple.set_connection_type(Some(AppleVpnConnectionType::MicrosoftTunnel));
        apple.set_server(Some(server));
        apple.set_on_demand_rules(Some(vec![rule]));
        apple.set_custom_key_value_data(Some(vec![pair]));
        apple.set_safari_domains(Some(vec![]));
        let device = apple.base_mut();
        device.set_display_name(Some("iOS VPN".to_string()));
        device.set_version(Some(3));
        device.set_created_date_time(Some(
            DateTime::parse_from_rfc3339("2024-05-01T08:30:00Z").unwrap(),
        ));
        device.base_mut().set_id(Some("cfg-1".to_string()));

        let (payload, decoded) = round_trip(&vpn);
        assert_eq!(decoded, vpn);
        assert_eq!(payload["@odata.type"], json!("#microsoft.graph.iosVpnConfiguration"));
        assert_eq!(payload["connectionType"], json!("microsoftTunnel"));
        assert_eq!(payload["server"]["isDefaultServer"], json!(true));
        assert_eq!(payload["onDemandRules"][0]["action"], json!("evaluateConnection"));
        assert_eq!(payload["safariDomains"], json!([]));
        assert_eq!(payload["createdDateTime"], json!("2024-05-01T08:30:00Z"));
        assert!(payload.get("realm").is_none());
    }

    #[test]
    fn test_apple_family_dispatch() {
        let kind: AppleVpnConfigurationKind = decode(json!({
            "@odata.type": "#microsoft.graph.macOSVpnConfiguration",
            "realm": "CONTOSO",
        }));
        let AppleVpnConfigurationKind::MacOsVpnConfiguration(mac) = &kind else {
            panic!("unexpected variant: {:?}", kind);
        };
        assert_eq!(mac.base().realm().map(String::as_str), Some("CONTOSO"));

        // A sibling family's tag is unknown here
        let kind: AppleVpnConfigurationKind = decode(json!({
            "@odata.type": "#microsoft.graph.depIOSEnrollmentProfile",
        }));
        assert!(matches!(kind, AppleVpnConfigurationKind::AppleVpnConfiguration(_)));
    }

    #[test]
    fn test_device_configuration_family() {
        assert_eq!(
            DeviceConfigurationKind::discriminators(),
            vec![
                "#microsoft.graph.deviceConfiguration",
                "#microsoft.graph.appleVpnConfiguration",
                "#microsoft.graph.iosVpnConfiguration",
                "#microsoft.graph.macOSVpnConfiguration",
            ]
        );

        let kind: DeviceConfigurationKind = decode(json!({
            "@odata.type": "#microsoft.graph.appleVpnConfiguration",
            "authenticationMethod": "sharedSecret",
        }));
        let DeviceConfigurationKind::AppleVpnConfiguration(
            AppleVpnConfigurationKind::AppleVpnConfiguration(apple),
        ) = &kind
        else {
            panic!("unexpected variant: {:?}", kind);
        };
        assert_eq!(
            apple.authentication_method(),
            Some(&VpnAuthenticationMethod::SharedSecret)
        );
        assert_eq!(DeviceConfigurationKind::default(), DeviceConfigurationKind::base());
        assert!(kind.field_deserializers().contains_key("connectionName"));
    }

    #[test]
    fn test_unknown_enum_string_fails_decode() {
        let payload = json!({"providerType": "telepathy"});
        let node = crate::serialization::JsonParseNode::new(&payload);
        let node: &dyn crate::serialization::ParseNode = &node;
        assert!(node
            .object_value(AppleVpnConfiguration::create_from_discriminator_value)
            .is_err());
    }
}
