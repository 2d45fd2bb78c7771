//! Label configuration
//!
//! The token runtime refers to the device objects by label. Each label comes
//! with a slot address string naming the secure element data object that
//! backs it; by default the label is its own slot address. Defaults can be
//! replaced at build time through the `SEPAL_LABEL_*` environment variables.

use crate::model::ObjectClass;

macro_rules! build_label {
    ($var:literal, $default:literal) => {
        match option_env!($var) {
            Some(label) => label,
            None => $default,
        }
    };
}

/// Certificate data object used for TLS client authentication
pub const LABEL_DEVICE_CERTIFICATE: &str =
    build_label!("SEPAL_LABEL_DEVICE_CERTIFICATE", "0xE0E0");

/// Key store slot holding the device private key
pub const LABEL_DEVICE_PRIVATE_KEY: &str =
    build_label!("SEPAL_LABEL_DEVICE_PRIVATE_KEY", "0xE0F0");

/// Arbitrary data object holding the device public key
pub const LABEL_DEVICE_PUBLIC_KEY: &str = build_label!("SEPAL_LABEL_DEVICE_PUBLIC_KEY", "0xF1D0");

/// Trust anchor used to verify firmware images
pub const LABEL_CODE_VERIFICATION_KEY: &str =
    build_label!("SEPAL_LABEL_CODE_VERIFICATION_KEY", "0xE0E8");

/// Label and backing slot address of one directory object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntryConfig {
    /// Label the token runtime looks the object up by
    pub label: String,
    /// Hexadecimal data object address, e.g. "0xE0E0"
    pub slot_address: String,
}

impl ObjectEntryConfig {
    /// Entry whose label doubles as its slot address
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            slot_address: label.clone(),
            label,
        }
    }

    pub fn with_slot_address(mut self, slot_address: impl Into<String>) -> Self {
        self.slot_address = slot_address.into();
        self
    }
}

/// Labels for the four directory objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    pub device_certificate: ObjectEntryConfig,
    pub device_private_key: ObjectEntryConfig,
    pub device_public_key: ObjectEntryConfig,
    pub code_verification_key: ObjectEntryConfig,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            device_certificate: ObjectEntryConfig::new(LABEL_DEVICE_CERTIFICATE),
            device_private_key: ObjectEntryConfig::new(LABEL_DEVICE_PRIVATE_KEY),
            device_public_key: ObjectEntryConfig::new(LABEL_DEVICE_PUBLIC_KEY),
            code_verification_key: ObjectEntryConfig::new(LABEL_CODE_VERIFICATION_KEY),
        }
    }
}

impl LabelConfig {
    pub fn entry(&self, class: ObjectClass) -> &ObjectEntryConfig {
        match class {
            ObjectClass::DeviceCertificate => &self.device_certificate,
            ObjectClass::DevicePrivateKey => &self.device_private_key,
            ObjectClass::DevicePublicKey => &self.device_public_key,
            ObjectClass::CodeVerificationKey => &self.code_verification_key,
        }
    }

    pub fn with_entry(mut self, class: ObjectClass, entry: ObjectEntryConfig) -> Self {
        match class {
            ObjectClass::DeviceCertificate => self.device_certificate = entry,
            ObjectClass::DevicePrivateKey => self.device_private_key = entry,
            ObjectClass::DevicePublicKey => self.device_public_key = entry,
            ObjectClass::CodeVerificationKey => self.code_verification_key = entry,
        }
        self
    }
}
