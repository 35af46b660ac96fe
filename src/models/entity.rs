//! Base entity and the family of every modeled entity type

use super::{
    BaseItemKind, Call, DeviceConfigurationKind, DeviceManagementSettingInstanceKind,
    EnrollmentProfileKind, ImportedAppleDeviceIdentity, OnlineMeeting, WebPartKind,
    ZebraFotaDeployment,
};

graph_model! {
    /// Root of every addressable Graph resource
    pub struct Entity {
        /// The unique identifier for an entity. Read-only.
        "id" => id / set_id: String,
    }
}

graph_family! {
    /// Any entity, resolved through its `@odata.type`
    pub enum EntityKind {
        base Entity = "#microsoft.graph.entity";
        variants {
            Call = "#microsoft.graph.call",
            ImportedAppleDeviceIdentity = "#microsoft.graph.importedAppleDeviceIdentity",
            OnlineMeeting = "#microsoft.graph.onlineMeeting",
            ZebraFotaDeployment = "#microsoft.graph.zebraFotaDeployment",
        }
        nested {
            BaseItem(BaseItemKind),
            DeviceConfiguration(DeviceConfigurationKind),
            DeviceManagementSettingInstance(DeviceManagementSettingInstanceKind),
            EnrollmentProfile(EnrollmentProfileKind),
            WebPart(WebPartKind),
        }
    }
}
