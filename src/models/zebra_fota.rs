//! Zebra firmware-over-the-air deployments

use super::Entity;
use chrono::{DateTime, FixedOffset, NaiveTime};

graph_enum! {
    /// Network types a firmware download may use.
    pub enum ZebraFotaNetworkType {
        Any => "any",
        Wifi => "wifi",
        Cellular => "cellular",
        WifiAndCellular => "wifiAndCellular",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum ZebraFotaScheduleMode {
        InstallNow => "installNow",
        Scheduled => "scheduled",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum ZebraFotaUpdateType {
        Custom => "custom",
        Latest => "latest",
        AutoUpdate => "autoUpdate",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    /// Lifecycle of a deployment as reported by Zebra.
    pub enum ZebraFotaDeploymentState {
        PendingCreation => "pendingCreation",
        CreateFailed => "createFailed",
        Created => "created",
        InProgress => "inProgress",
        Completed => "completed",
        PendingCancel => "pendingCancel",
        Canceled => "canceled",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_model! {
    /// The Zebra FOTA deployment complex type that describes the settings required to create a
    /// FOTA deployment.
    pub struct ZebraFotaDeploymentSettings {
        /// Minimum battery level (%) required for both download and installation. Default: -1.
        "batteryRuleMinimumBatteryLevelPercentage" => battery_rule_minimum_battery_level_percentage / set_battery_rule_minimum_battery_level_percentage: i32,
        "batteryRuleRequireCharger" => battery_rule_require_charger / set_battery_rule_require_charger: bool,
        "deviceModel" => device_model / set_device_model: String,
        "downloadRuleNetworkType" => download_rule_network_type / set_download_rule_network_type: ZebraFotaNetworkType,
        "downloadRuleStartDateTime" => download_rule_start_date_time / set_download_rule_start_date_time: DateTime<FixedOffset>,
        "firmwareTargetArtifactDescription" => firmware_target_artifact_description / set_firmware_target_artifact_description: String,
        "firmwareTargetBoardSupportPackageVersion" => firmware_target_board_support_package_version / set_firmware_target_board_support_package_version: String,
        "firmwareTargetOsVersion" => firmware_target_os_version / set_firmware_target_os_version: String,
        "firmwareTargetPatch" => firmware_target_patch / set_firmware_target_patch: String,
        "installRuleStartDateTime" => install_rule_start_date_time / set_install_rule_start_date_time: DateTime<FixedOffset>,
        /// Time of day after which installs stop. Default: 23:59:59.
        "installRuleWindowEndTime" => install_rule_window_end_time / set_install_rule_window_end_time: NaiveTime,
        "installRuleWindowStartTime" => install_rule_window_start_time / set_install_rule_window_start_time: NaiveTime,
        "scheduleDurationInDays" => schedule_duration_in_days / set_schedule_duration_in_days: i32,
        "scheduleMode" => schedule_mode / set_schedule_mode: ZebraFotaScheduleMode,
        "timeZoneOffsetInMinutes" => time_zone_offset_in_minutes / set_time_zone_offset_in_minutes: i32,
        "updateType" => update_type / set_update_type: ZebraFotaUpdateType,
    }
}

graph_model! {
    /// Describes the status for a single FOTA deployment.
    pub struct ZebraFotaDeploymentStatus {
        "cancelRequested" => cancel_requested / set_cancel_requested: bool,
        "completeOrCanceledDateTime" => complete_or_canceled_date_time / set_complete_or_canceled_date_time: DateTime<FixedOffset>,
        "lastUpdatedDateTime" => last_updated_date_time / set_last_updated_date_time: DateTime<FixedOffset>,
        "state" => state / set_state: ZebraFotaDeploymentState,
        "totalAwaitingInstall" => total_awaiting_install / set_total_awaiting_install: i32,
        "totalCanceled" => total_canceled / set_total_canceled: i32,
        "totalCreated" => total_created / set_total_created: i32,
        "totalDevices" => total_devices / set_total_devices: i32,
        "totalDownloading" => total_downloading / set_total_downloading: i32,
        "totalFailedDownload" => total_failed_download / set_total_failed_download: i32,
        "totalFailedInstall" => total_failed_install / set_total_failed_install: i32,
        "totalScheduled" => total_scheduled / set_total_scheduled: i32,
        "totalSucceededInstall" => total_succeeded_install / set_total_succeeded_install: i32,
        "totalUnknown" => total_unknown / set_total_unknown: i32,
    }
}

graph_model! {
    pub struct ZebraFotaDeployment: Entity {
        "deploymentSettings" => deployment_settings / set_deployment_settings: ZebraFotaDeploymentSettings,
        "deploymentStatus" => deployment_status / set_deployment_status: ZebraFotaDeploymentStatus,
        "description" => description / set_description: String,
        "displayName" => display_name / set_display_name: String,
        "roleScopeTagIds" => role_scope_tag_ids / set_role_scope_tag_ids: Vec<String>,
    }
}
