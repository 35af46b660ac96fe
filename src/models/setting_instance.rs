//! Intent setting instances. Collection and complex instances hold further
//! instances, so decoding recurses through the family.

use super::Entity;

graph_model! {
    /// Base type for a setting instance
    pub struct DeviceManagementSettingInstance: Entity {
        /// The ID of the setting definition for this instance
        "definitionId" => definition_id / set_definition_id: String,
        /// JSON representation of the value
        "valueJson" => value_json / set_value_json: String,
    }
}

graph_model! {
    pub struct DeviceManagementBooleanSettingInstance: DeviceManagementSettingInstance = "#microsoft.graph.deviceManagementBooleanSettingInstance" {
        "value" => value / set_value: bool,
    }
}

graph_model! {
    pub struct DeviceManagementIntegerSettingInstance: DeviceManagementSettingInstance = "#microsoft.graph.deviceManagementIntegerSettingInstance" {
        "value" => value / set_value: i32,
    }
}

graph_model! {
    pub struct DeviceManagementStringSettingInstance: DeviceManagementSettingInstance = "#microsoft.graph.deviceManagementStringSettingInstance" {
        "value" => value / set_value: String,
    }
}

graph_model! {
    /// A setting instance representing a collection of values
    pub struct DeviceManagementCollectionSettingInstance: DeviceManagementSettingInstance = "#microsoft.graph.deviceManagementCollectionSettingInstance" {
        "value" => value / set_value: Vec<DeviceManagementSettingInstanceKind>,
    }
}

graph_model! {
    /// A setting instance representing a complex value
    pub struct DeviceManagementComplexSettingInstance: DeviceManagementSettingInstance = "#microsoft.graph.deviceManagementComplexSettingInstance" {
        "value" => value / set_value: Vec<DeviceManagementSettingInstanceKind>,
    }
}

graph_model! {
    /// A setting instance representing a complex value for an abstract setting
    pub struct DeviceManagementAbstractComplexSettingInstance: DeviceManagementSettingInstance = "#microsoft.graph.deviceManagementAbstractComplexSettingInstance" {
        /// The definition ID for the chosen implementation of this complex setting
        "implementationId" => implementation_id / set_implementation_id: String,
        "value" => value / set_value: Vec<DeviceManagementSettingInstanceKind>,
    }
}

graph_family! {
    pub enum DeviceManagementSettingInstanceKind {
        base DeviceManagementSettingInstance = "#microsoft.graph.deviceManagementSettingInstance";
        variants {
            DeviceManagementAbstractComplexSettingInstance = "#microsoft.graph.deviceManagementAbstractComplexSettingInstance",
            DeviceManagementBooleanSettingInstance = "#microsoft.graph.deviceManagementBooleanSettingInstance",
            DeviceManagementCollectionSettingInstance = "#microsoft.graph.deviceManagementCollectionSettingInstance",
            DeviceManagementComplexSettingInstance = "#microsoft.graph.deviceManagementComplexSettingInstance",
            DeviceManagementIntegerSettingInstance = "#microsoft.graph.deviceManagementIntegerSettingInstance",
            DeviceManagementStringSettingInstance = "#microsoft.graph.deviceManagementStringSettingInstance",
        }
        nested {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{decode, round_trip};
    use crate::serialization::Family;
    use serde_json::json;

    #[test]
    fn test_recursive_decode() {
        let kind: DeviceManagementSettingInstanceKind = decode(json!({
            "@odata.type": "#microsoft.graph.deviceManagementComplexSettingInstance",
            "definitionId": "firewall",
            "value": [
                {
                    "@odata.type": "#microsoft.graph.deviceManagementBooleanSettingInstance",
                    "definitionId": "firewall_enabled",
                    "value": true,
                },
                null,
                {
                    "@odata.type": "#microsoft.graph.deviceManagementCollectionSettingInstance",
                    "definitionId": "firewall_ports",
                    "value": [
                        {
                            "@odata.type": "#microsoft.graph.deviceManagementIntegerSettingInstance",
                            "value": 443,
                        },
                        {"definitionId": "untyped"},
                    ],
                },
            ],
        }));

        let DeviceManagementSettingInstanceKind::DeviceManagementComplexSettingInstance(complex) = &kind
        else {
            panic!("unexpected variant: {:?}", kind);
        };
        assert_eq!(complex.base().definition_id().map(String::as_str), Some("firewall"));

        let children = complex.value().unwrap();
        assert_eq!(children.len(), 2);
        assert!(matches!(
            &children[0],
            DeviceManagementSettingInstanceKind::DeviceManagementBooleanSettingInstance(flag)
                if flag.value() == Some(&true)
        ));

        let DeviceManagementSettingInstanceKind::DeviceManagementCollectionSettingInstance(ports) =
            &children[1]
        else {
            panic!("unexpected variant: {:?}", children[1]);
        };
        let ports = ports.value().unwrap();
        assert!(matches!(
            &ports[0],
            DeviceManagementSettingInstanceKind::DeviceManagementIntegerSettingInstance(port)
                if port.value() == Some(&443)
        ));
        assert!(matches!(
            &ports[1],
            DeviceManagementSettingInstanceKind::DeviceManagementSettingInstance(_)
        ));
    }

    #[test]
    fn test_abstract_complex_round_trip() {
        let mut name = DeviceManagementStringSettingInstance::new();
        name.set_value(Some("Contoso".to_string()));
        name.base_mut().set_definition_id(Some("org_name".to_string()));

        let mut instance = DeviceManagementAbstractComplexSettingInstance::new();
        instance.set_implementation_id(Some("impl-7".to_string()));
        instance.set_value(Some(vec![name.into()]));

        let (payload, decoded) = round_trip(&instance);
        assert_eq!(decoded, instance);
        assert_eq!(
            payload["value"][0]["@odata.type"],
            json!("#microsoft.graph.deviceManagementStringSettingInstance")
        );
        assert_eq!(payload["value"][0]["value"], json!("Contoso"));
    }

    #[test]
    fn test_base_tag_and_fallback() {
        let kind = DeviceManagementSettingInstanceKind::from_odata_type(
            "#microsoft.graph.deviceManagementSettingInstance",
        )
        .unwrap();
        assert_eq!(kind, DeviceManagementSettingInstanceKind::base());
        assert!(DeviceManagementSettingInstanceKind::from_odata_type("#microsoft.graph.entity").is_none());
        assert_eq!(DeviceManagementSettingInstanceKind::discriminators().len(), 7);
    }
}
