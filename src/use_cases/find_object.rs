//! Find object use case

use tracing::debug;

use crate::error::{DirectoryError, SepalResult};
use crate::logic::ObjectTable;
use crate::model::ObjectHandle;

/// Translate a PKCS#11 label into the handle of its object class
///
/// Pure classification: the secure element is not consulted.
///
/// # Errors
///
/// Returns `DirectoryError::UnknownLabel` if no object carries `label`
pub fn find_object(table: &ObjectTable, label: &[u8]) -> SepalResult<ObjectHandle> {
    let entry = table.classify(label).ok_or_else(|| DirectoryError::UnknownLabel {
        label: String::from_utf8_lossy(label).into_owned(),
    })?;

    debug!("Label {} is the {}", entry.label(), entry.class());
    Ok(entry.handle())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        LabelConfig, LABEL_CODE_VERIFICATION_KEY, LABEL_DEVICE_CERTIFICATE,
        LABEL_DEVICE_PRIVATE_KEY, LABEL_DEVICE_PUBLIC_KEY,
    };
    use crate::model::ObjectClass;
    use crate::SepalError;

    fn table() -> ObjectTable {
        ObjectTable::from_config(&LabelConfig::default()).unwrap()
    }

    #[test]
    fn test_find_known_labels() {
        let table = table();
        let cases = [
            (LABEL_DEVICE_CERTIFICATE, ObjectClass::DeviceCertificate),
            (LABEL_DEVICE_PRIVATE_KEY, ObjectClass::DevicePrivateKey),
            (LABEL_DEVICE_PUBLIC_KEY, ObjectClass::DevicePublicKey),
            (LABEL_CODE_VERIFICATION_KEY, ObjectClass::CodeVerificationKey),
        ];

        for (label, class) in cases {
            assert_eq!(find_object(&table, label.as_bytes()).unwrap(), class.handle());
        }
    }

    #[test]
    fn test_find_unknown_label() {
        let result = find_object(&table(), b"Device Root CA");

        assert!(matches!(
            result.unwrap_err(),
            SepalError::Directory(DirectoryError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn test_find_prefix_does_not_match() {
        let label = &LABEL_DEVICE_CERTIFICATE.as_bytes()[..LABEL_DEVICE_CERTIFICATE.len() - 1];
        assert!(find_object(&table(), label).is_err());
    }
}
