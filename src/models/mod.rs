//! Graph beta models

mod bitlocker;
mod communications;
mod device_configuration;
mod enrollment;
mod entity;
mod odata;
mod setting_instance;
mod site_page;
mod zebra_fota;

pub use bitlocker::{
    BitLockerEncryptionMethod, BitLockerRecoveryInformationType, BitLockerRecoveryOptions,
    BitLockerSystemDrivePolicy, ConfigurationUsage,
};
pub use communications::{
    AudioConferencing, BodyType, Call, CallDirection, CallState, ChatInfo, ItemBody,
    JoinMeetingIdSettings, LobbyBypassScope, LobbyBypassSettings, MeetingCapabilities,
    MeetingParticipantInfo, MeetingParticipants, Modality, OnlineMeeting, OnlineMeetingPresenters,
    OnlineMeetingRole,
};
pub use device_configuration::{
    AppleVpnConfiguration, AppleVpnConfigurationKind, AppleVpnConnectionType, DeviceConfiguration,
    DeviceConfigurationKind, IosVpnConfiguration, KeyValuePair, MacOsVpnConfiguration,
    VpnAuthenticationMethod, VpnOnDemandRule, VpnOnDemandRuleConnectionAction, VpnProviderType,
    VpnProxyServer, VpnServer,
};
pub use enrollment::{
    DepEnrollmentBaseProfile, DepEnrollmentBaseProfileKind, DepEnrollmentProfile,
    DepIosEnrollmentProfile, DepMacOsEnrollmentProfile, DiscoverySource, EnrollmentProfile,
    EnrollmentProfileKind, EnrollmentState, ITunesPairingMode, ImportedAppleDeviceIdentity,
    ManagementCertificateWithThumbprint, Platform,
};
pub use entity::{Entity, EntityKind};
pub use odata::CollectionResponse;
pub use setting_instance::{
    DeviceManagementAbstractComplexSettingInstance, DeviceManagementBooleanSettingInstance,
    DeviceManagementCollectionSettingInstance, DeviceManagementComplexSettingInstance,
    DeviceManagementIntegerSettingInstance, DeviceManagementSettingInstance,
    DeviceManagementSettingInstanceKind, DeviceManagementStringSettingInstance,
};
pub use site_page::{
    BaseItem, BaseItemKind, MetaDataKeyStringPair, PageLayoutType, PagePromotionType,
    PublicationFacet, ServerProcessedContent, SitePage, StandardWebPart, TextWebPart, TitleArea,
    TitleAreaLayoutType, TitleAreaTextAlignmentType, WebPart, WebPartKind,
};
pub use zebra_fota::{
    ZebraFotaDeployment, ZebraFotaDeploymentSettings, ZebraFotaDeploymentState,
    ZebraFotaDeploymentStatus, ZebraFotaNetworkType, ZebraFotaScheduleMode, ZebraFotaUpdateType,
};
