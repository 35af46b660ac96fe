//! Apple automated device enrollment profiles and imported device identities

use super::Entity;
use chrono::{DateTime, FixedOffset};

graph_enum! {
    pub enum EnrollmentState {
        /// Device enrollment state is unknown
        Unknown => "unknown",
        /// Device is Enrolled.
        Eligible => "eligible",
        /// Enrolled
        Enrolled => "enrolled",
        /// Device's enrollment is pending reset.
        PendingReset => "pendingReset",
        /// Not enrolled and there is enrollment failure record.
        Failed => "failed",
        /// Device is not contacted.
        NotContacted => "notContacted",
        /// Device is blocked.
        Blocked => "blocked",
    }
}

graph_enum! {
    pub enum DiscoverySource {
        Unknown => "unknown",
        AdminImport => "adminImport",
        DeviceEnrollmentProgram => "deviceEnrollmentProgram",
    }
}

graph_enum! {
    pub enum Platform {
        Unknown => "unknown",
        Ios => "ios",
        Android => "android",
        Windows => "windows",
        WindowsMobile => "windowsMobile",
        MacOs => "macOS",
    }
}

graph_enum! {
    /// Pairing mode of an iOS device with iTunes.
    pub enum ITunesPairingMode {
        Disallow => "disallow",
        Allow => "allow",
        RequiresCertificate => "requiresCertificate",
    }
}

graph_model! {
    pub struct ManagementCertificateWithThumbprint {
        /// The Base 64 encoded management certificate
        "certificate" => certificate / set_certificate: String,
        "thumbprint" => thumbprint / set_thumbprint: String,
    }
}

graph_model! {
    /// The enrollmentProfile resource represents a collection of configurations which must be
    /// provided pre-enrollment to enable enrolling certain devices whose identities have been
    /// pre-staged.
    pub struct EnrollmentProfile: Entity {
        "configurationEndpointUrl" => configuration_endpoint_url / set_configuration_endpoint_url: String,
        "description" => description / set_description: String,
        "displayName" => display_name / set_display_name: String,
        "enableAuthenticationViaCompanyPortal" => enable_authentication_via_company_portal / set_enable_authentication_via_company_portal: bool,
        "requireCompanyPortalOnSetupAssistantEnrolledDevices" => require_company_portal_on_setup_assistant_enrolled_devices / set_require_company_portal_on_setup_assistant_enrolled_devices: bool,
        "requiresUserAuthentication" => requires_user_authentication / set_requires_user_authentication: bool,
    }
}

graph_model! {
    /// The depEnrollmentProfile resource represents an Apple Device Enrollment Program (DEP)
    /// enrollment profile.
    pub struct DepEnrollmentProfile: EnrollmentProfile = "#microsoft.graph.depEnrollmentProfile" {
        "appleIdDisabled" => apple_id_disabled / set_apple_id_disabled: bool,
        "applePayDisabled" => apple_pay_disabled / set_apple_pay_disabled: bool,
        "awaitDeviceConfiguredConfirmation" => await_device_configured_confirmation / set_await_device_configured_confirmation: bool,
        "diagnosticsDisabled" => diagnostics_disabled / set_diagnostics_disabled: bool,
        "enableSharedIPad" => enable_shared_ipad / set_enable_shared_ipad: bool,
        "isDefault" => is_default / set_is_default: bool,
        "isMandatory" => is_mandatory / set_is_mandatory: bool,
        "iTunesPairingMode" => itunes_pairing_mode / set_itunes_pairing_mode: ITunesPairingMode,
        "locationDisabled" => location_disabled / set_location_disabled: bool,
        "macOSFileVaultDisabled" => mac_os_file_vault_disabled / set_mac_os_file_vault_disabled: bool,
        "macOSRegistrationDisabled" => mac_os_registration_disabled / set_mac_os_registration_disabled: bool,
        "managementCertificates" => management_certificates / set_management_certificates: Vec<ManagementCertificateWithThumbprint>,
        "passCodeDisabled" => pass_code_disabled / set_pass_code_disabled: bool,
        "profileRemovalDisabled" => profile_removal_disabled / set_profile_removal_disabled: bool,
        "restoreBlocked" => restore_blocked / set_restore_blocked: bool,
        "restoreFromAndroidDisabled" => restore_from_android_disabled / set_restore_from_android_disabled: bool,
        "sharedIPadMaximumUserCount" => shared_ipad_maximum_user_count / set_shared_ipad_maximum_user_count: i32,
        "siriDisabled" => siri_disabled / set_siri_disabled: bool,
        "supervisedModeEnabled" => supervised_mode_enabled / set_supervised_mode_enabled: bool,
        "supportDepartment" => support_department / set_support_department: String,
        "supportPhoneNumber" => support_phone_number / set_support_phone_number: String,
        "termsAndConditionsDisabled" => terms_and_conditions_disabled / set_terms_and_conditions_disabled: bool,
        "touchIdDisabled" => touch_id_disabled / set_touch_id_disabled: bool,
        "zoomDisabled" => zoom_disabled / set_zoom_disabled: bool,
    }
}

graph_model! {
    /// Shared settings of the iOS and macOS DEP enrollment profiles.
    pub struct DepEnrollmentBaseProfile: EnrollmentProfile = "#microsoft.graph.depEnrollmentBaseProfile" {
        "appleIdDisabled" => apple_id_disabled / set_apple_id_disabled: bool,
        "applePayDisabled" => apple_pay_disabled / set_apple_pay_disabled: bool,
        "configurationWebUrl" => configuration_web_url / set_configuration_web_url: bool,
        "deviceNameTemplate" => device_name_template / set_device_name_template: String,
        "diagnosticsDisabled" => diagnostics_disabled / set_diagnostics_disabled: bool,
        "displayToneSetupDisabled" => display_tone_setup_disabled / set_display_tone_setup_disabled: bool,
        /// Setup assistant screens skipped for the user
        "enabledSkipKeys" => enabled_skip_keys / set_enabled_skip_keys: Vec<String>,
        "isDefault" => is_default / set_is_default: bool,
        "isMandatory" => is_mandatory / set_is_mandatory: bool,
        "locationDisabled" => location_disabled / set_location_disabled: bool,
        "privacyPaneDisabled" => privacy_pane_disabled / set_privacy_pane_disabled: bool,
        "profileRemovalDisabled" => profile_removal_disabled / set_profile_removal_disabled: bool,
        "restoreBlocked" => restore_blocked / set_restore_blocked: bool,
        "screenTimeScreenDisabled" => screen_time_screen_disabled / set_screen_time_screen_disabled: bool,
        "siriDisabled" => siri_disabled / set_siri_disabled: bool,
        "supervisedModeEnabled" => supervised_mode_enabled / set_supervised_mode_enabled: bool,
        "supportDepartment" => support_department / set_support_department: String,
        "supportPhoneNumber" => support_phone_number / set_support_phone_number: String,
        "termsAndConditionsDisabled" => terms_and_conditions_disabled / set_terms_and_conditions_disabled: bool,
        "touchIdDisabled" => touch_id_disabled / set_touch_id_disabled: bool,
    }
}

graph_model! {
    pub struct DepIosEnrollmentProfile: DepEnrollmentBaseProfile = "#microsoft.graph.depIOSEnrollmentProfile" {
        "appearanceScreenDisabled" => appearance_screen_disabled / set_appearance_screen_disabled: bool,
        "awaitDeviceConfiguredConfirmation" => await_device_configured_confirmation / set_await_device_configured_confirmation: bool,
        /// Carrier URL for activating device eSIM.
        "carrierActivationUrl" => carrier_activation_url / set_carrier_activation_url: String,
        "companyPortalVppTokenId" => company_portal_vpp_token_id / set_company_portal_vpp_token_id: String,
        "deviceToDeviceMigrationDisabled" => device_to_device_migration_disabled / set_device_to_device_migration_disabled: bool,
        "enableSharedIPad" => enable_shared_ipad / set_enable_shared_ipad: bool,
        "enableSingleAppEnrollmentMode" => enable_single_app_enrollment_mode / set_enable_single_app_enrollment_mode: bool,
        "expressLanguageScreenDisabled" => express_language_screen_disabled / set_express_language_screen_disabled: bool,
        "forceTemporarySession" => force_temporary_session / set_force_temporary_session: bool,
        "homeButtonScreenDisabled" => home_button_screen_disabled / set_home_button_screen_disabled: bool,
        "iMessageAndFaceTimeScreenDisabled" => imessage_and_face_time_screen_disabled / set_imessage_and_face_time_screen_disabled: bool,
        "iTunesPairingMode" => itunes_pairing_mode / set_itunes_pairing_mode: ITunesPairingMode,
        "managementCertificates" => management_certificates / set_management_certificates: Vec<ManagementCertificateWithThumbprint>,
        "onBoardingScreenDisabled" => on_boarding_screen_disabled / set_on_boarding_screen_disabled: bool,
        "passCodeDisabled" => pass_code_disabled / set_pass_code_disabled: bool,
        "passcodeLockGracePeriodInSeconds" => passcode_lock_grace_period_in_seconds / set_passcode_lock_grace_period_in_seconds: i32,
        "preferredLanguageScreenDisabled" => preferred_language_screen_disabled / set_preferred_language_screen_disabled: bool,
        "restoreCompletedScreenDisabled" => restore_completed_screen_disabled / set_restore_completed_screen_disabled: bool,
        "restoreFromAndroidDisabled" => restore_from_android_disabled / set_restore_from_android_disabled: bool,
        "sharedIPadMaximumUserCount" => shared_ipad_maximum_user_count / set_shared_ipad_maximum_user_count: i32,
        "simSetupScreenDisabled" => sim_setup_screen_disabled / set_sim_setup_screen_disabled: bool,
        "softwareUpdateScreenDisabled" => software_update_screen_disabled / set_software_update_screen_disabled: bool,
        "temporarySessionTimeoutInSeconds" => temporary_session_timeout_in_seconds / set_temporary_session_timeout_in_seconds: i32,
        "updateCompleteScreenDisabled" => update_complete_screen_disabled / set_update_complete_screen_disabled: bool,
        "userlessSharedAadModeEnabled" => userless_shared_aad_mode_enabled / set_userless_shared_aad_mode_enabled: bool,
        "userSessionTimeoutInSeconds" => user_session_timeout_in_seconds / set_user_session_timeout_in_seconds: i32,
        "watchMigrationScreenDisabled" => watch_migration_screen_disabled / set_watch_migration_screen_disabled: bool,
        "welcomeScreenDisabled" => welcome_screen_disabled / set_welcome_screen_disabled: bool,
        "zoomDisabled" => zoom_disabled / set_zoom_disabled: bool,
    }
}

graph_model! {
    pub struct DepMacOsEnrollmentProfile: DepEnrollmentBaseProfile = "#microsoft.graph.depMacOSEnrollmentProfile" {
        "accessibilityScreenDisabled" => accessibility_screen_disabled / set_accessibility_screen_disabled: bool,
        "autoUnlockWithWatchDisabled" => auto_unlock_with_watch_disabled / set_auto_unlock_with_watch_disabled: bool,
        "chooseYourLockScreenDisabled" => choose_your_lock_screen_disabled / set_choose_your_lock_screen_disabled: bool,
        "dontAutoPopulatePrimaryAccountInfo" => dont_auto_populate_primary_account_info / set_dont_auto_populate_primary_account_info: bool,
        "enableRestrictEditing" => enable_restrict_editing / set_enable_restrict_editing: bool,
        "fileVaultDisabled" => file_vault_disabled / set_file_vault_disabled: bool,
        "iCloudDiagnosticsDisabled" => icloud_diagnostics_disabled / set_icloud_diagnostics_disabled: bool,
        "iCloudStorageDisabled" => icloud_storage_disabled / set_icloud_storage_disabled: bool,
        "isLocalPrimaryAccount" => is_local_primary_account / set_is_local_primary_account: bool,
        "lockPrimaryAccountInfo" => lock_primary_account_info / set_lock_primary_account_info: bool,
        "managedLocalUserShortName" => managed_local_user_short_name / set_managed_local_user_short_name: bool,
        "passCodeDisabled" => pass_code_disabled / set_pass_code_disabled: bool,
        "prefillAccountInfo" => prefill_account_info / set_prefill_account_info: bool,
        "primaryAccountFullName" => primary_account_full_name / set_primary_account_full_name: String,
        "primaryAccountUserName" => primary_account_user_name / set_primary_account_user_name: String,
        "registrationDisabled" => registration_disabled / set_registration_disabled: bool,
        "requestRequiresNetworkTether" => request_requires_network_tether / set_request_requires_network_tether: bool,
        "setPrimarySetupAccountAsRegularUser" => set_primary_setup_account_as_regular_user / set_set_primary_setup_account_as_regular_user: bool,
        "skipPrimarySetupAccountCreation" => skip_primary_setup_account_creation / set_skip_primary_setup_account_creation: bool,
        "zoomDisabled" => zoom_disabled / set_zoom_disabled: bool,
    }
}

graph_model! {
    /// The importedAppleDeviceIdentity resource represents the imported device identity of an
    /// Apple device.
    pub struct ImportedAppleDeviceIdentity: Entity {
        "createdDateTime" => created_date_time / set_created_date_time: DateTime<FixedOffset>,
        "description" => description / set_description: String,
        "discoverySource" => discovery_source / set_discovery_source: DiscoverySource,
        "enrollmentState" => enrollment_state / set_enrollment_state: EnrollmentState,
        "isDeleted" => is_deleted / set_is_deleted: bool,
        "isSupervised" => is_supervised / set_is_supervised: bool,
        "lastContactedDateTime" => last_contacted_date_time / set_last_contacted_date_time: DateTime<FixedOffset>,
        "platform" => platform / set_platform: Platform,
        "requestedEnrollmentProfileAssignmentDateTime" => requested_enrollment_profile_assignment_date_time / set_requested_enrollment_profile_assignment_date_time: DateTime<FixedOffset>,
        "requestedEnrollmentProfileId" => requested_enrollment_profile_id / set_requested_enrollment_profile_id: String,
        "serialNumber" => serial_number / set_serial_number: String,
    }
}

graph_family! {
    pub enum DepEnrollmentBaseProfileKind {
        base DepEnrollmentBaseProfile = "#microsoft.graph.depEnrollmentBaseProfile";
        variants {
            DepIosEnrollmentProfile = "#microsoft.graph.depIOSEnrollmentProfile",
            DepMacOsEnrollmentProfile = "#microsoft.graph.depMacOSEnrollmentProfile",
        }
        nested {}
    }
}

graph_family! {
    pub enum EnrollmentProfileKind {
        base EnrollmentProfile = "#microsoft.graph.enrollmentProfile";
        variants {
            DepEnrollmentProfile = "#microsoft.graph.depEnrollmentProfile",
        }
        nested {
            DepEnrollmentBaseProfile(DepEnrollmentBaseProfileKind),
        }
    }
}
