//! BitLocker operating system drive policy

graph_enum! {
    /// BitLocker encryption methods.
    pub enum BitLockerEncryptionMethod {
        AesCbc128 => "aesCbc128",
        AesCbc256 => "aesCbc256",
        XtsAes128 => "xtsAes128",
        XtsAes256 => "xtsAes256",
    }
}

graph_enum! {
    /// Possible values of the ConfigurationUsage list.
    pub enum ConfigurationUsage {
        Blocked => "blocked",
        Required => "required",
        Allowed => "allowed",
        NotConfigured => "notConfigured",
    }
}

graph_enum! {
    pub enum BitLockerRecoveryInformationType {
        PasswordAndKey => "passwordAndKey",
        PasswordOnly => "passwordOnly",
    }
}

graph_model! {
    /// BitLocker recovery options for drives.
    pub struct BitLockerRecoveryOptions {
        "blockDataRecoveryAgent" => block_data_recovery_agent / set_block_data_recovery_agent: bool,
        "enableBitLockerAfterRecoveryInformationToStore" => enable_bit_locker_after_recovery_information_to_store / set_enable_bit_locker_after_recovery_information_to_store: bool,
        "enableRecoveryInformationSaveToStore" => enable_recovery_information_save_to_store / set_enable_recovery_information_save_to_store: bool,
        "hideRecoveryOptions" => hide_recovery_options / set_hide_recovery_options: bool,
        "recoveryInformationToStore" => recovery_information_to_store / set_recovery_information_to_store: BitLockerRecoveryInformationType,
        "recoveryKeyUsage" => recovery_key_usage / set_recovery_key_usage: ConfigurationUsage,
        "recoveryPasswordUsage" => recovery_password_usage / set_recovery_password_usage: ConfigurationUsage,
    }
}

graph_model! {
    /// BitLocker Encryption Base Policies.
    pub struct BitLockerSystemDrivePolicy {
        "encryptionMethod" => encryption_method / set_encryption_method: BitLockerEncryptionMethod,
        /// Indicates the minimum length of startup pin. Valid values 4 to 20
        "minimumPinLength" => minimum_pin_length / set_minimum_pin_length: i32,
        "prebootRecoveryEnableMessageAndUrl" => preboot_recovery_enable_message_and_url / set_preboot_recovery_enable_message_and_url: bool,
        "prebootRecoveryMessage" => preboot_recovery_message / set_preboot_recovery_message: String,
        "prebootRecoveryUrl" => preboot_recovery_url / set_preboot_recovery_url: String,
        "recoveryOptions" => recovery_options / set_recovery_options: BitLockerRecoveryOptions,
        /// Allow BitLocker without a compatible TPM (requires a password or a startup key on a USB flash drive).
        "startupAuthenticationBlockWithoutTpmChip" => startup_authentication_block_without_tpm_chip / set_startup_authentication_block_without_tpm_chip: bool,
        "startupAuthenticationRequired" => startup_authentication_required / set_startup_authentication_required: bool,
        "startupAuthenticationTpmKeyUsage" => startup_authentication_tpm_key_usage / set_startup_authentication_tpm_key_usage: ConfigurationUsage,
        "startupAuthenticationTpmPinAndKeyUsage" => startup_authentication_tpm_pin_and_key_usage / set_startup_authentication_tpm_pin_and_key_usage: ConfigurationUsage,
        "startupAuthenticationTpmPinUsage" => startup_authentication_tpm_pin_usage / set_startup_authentication_tpm_pin_usage: ConfigurationUsage,
        "startupAuthenticationTpmUsage" => startup_authentication_tpm_usage / set_startup_authentication_tpm_usage: ConfigurationUsage,
    }
}
