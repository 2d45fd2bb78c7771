use rand::RngCore;

use sepal::adapters::{FileSecureElement, MemorySecureElement};
use sepal::api::{ObjectClass, ObjectHandle, ReturnValue};
use sepal::config::{
    LabelConfig, ObjectEntryConfig, LABEL_CODE_VERIFICATION_KEY, LABEL_DEVICE_CERTIFICATE,
    LABEL_DEVICE_PRIVATE_KEY, LABEL_DEVICE_PUBLIC_KEY,
};
use sepal::use_cases::{MAX_OBJECT_SIZE, READ_BUFFER_SIZE};
use sepal::{get_value_cleanup, ObjectDirectory};

fn directory() -> ObjectDirectory<MemorySecureElement> {
    ObjectDirectory::new(MemorySecureElement::new()).unwrap()
}

#[test]
fn test_find_returns_fixed_handles() {
    let directory = directory();

    assert_eq!(
        directory.find(LABEL_DEVICE_CERTIFICATE.as_bytes()),
        ObjectClass::DeviceCertificate.handle()
    );
    assert_eq!(
        directory.find(LABEL_DEVICE_PRIVATE_KEY.as_bytes()),
        ObjectClass::DevicePrivateKey.handle()
    );
    assert_eq!(
        directory.find(LABEL_DEVICE_PUBLIC_KEY.as_bytes()),
        ObjectClass::DevicePublicKey.handle()
    );
    assert_eq!(
        directory.find(LABEL_CODE_VERIFICATION_KEY.as_bytes()),
        ObjectClass::CodeVerificationKey.handle()
    );

    let others: [&[u8]; 5] = [b"", b"0x", b"Device Cert", b"0xE0E0 ", b"\xff\xfe"];
    for other in others {
        assert_eq!(directory.find(other), ObjectHandle::INVALID);
    }
}

#[test]
fn test_oversized_save_never_touches_the_device() {
    let mut directory = directory();
    let data = vec![0x5A; MAX_OBJECT_SIZE + 1];

    for label in [
        LABEL_DEVICE_CERTIFICATE,
        LABEL_DEVICE_PRIVATE_KEY,
        LABEL_DEVICE_PUBLIC_KEY,
        LABEL_CODE_VERIFICATION_KEY,
    ] {
        assert_eq!(directory.save(label.as_bytes(), &data), ObjectHandle::INVALID);
    }
    assert_eq!(directory.secure_element().write_calls(), 0);
}

#[test]
fn test_private_key_is_accepted_but_never_transferred() {
    let mut directory = directory();
    let handle = ObjectClass::DevicePrivateKey.handle();

    assert_eq!(
        directory.save(LABEL_DEVICE_PRIVATE_KEY.as_bytes(), &[0x30; MAX_OBJECT_SIZE]),
        handle
    );

    let err = directory.get_value(handle).unwrap_err();
    assert_eq!(err.return_value(), ReturnValue::KeyHandleInvalid);

    let element = directory.into_secure_element();
    assert_eq!(element.write_calls(), 0);
    assert_eq!(element.read_calls(), 0);
}

#[test]
fn test_invalid_slot_address_blocks_the_write() {
    for address in ["0", "0x0000", "0xFFFF", "0x12345"] {
        let config = LabelConfig::default().with_entry(
            ObjectClass::DevicePublicKey,
            ObjectEntryConfig::new("Device Pub Key").with_slot_address(address),
        );
        let mut directory =
            ObjectDirectory::with_config(MemorySecureElement::new(), &config).unwrap();

        assert_eq!(
            directory.save(b"Device Pub Key", b"public key"),
            ObjectHandle::INVALID,
            "address {address}"
        );
        assert_eq!(directory.secure_element().write_calls(), 0);
    }
}

#[test]
fn test_unknown_handles_are_never_read() {
    let mut directory = directory();

    for handle in [0, 5, 1000] {
        let err = directory.get_value(ObjectHandle::new(handle)).unwrap_err();
        assert_eq!(err.return_value(), ReturnValue::KeyHandleInvalid);
    }
    assert_eq!(directory.secure_element().read_calls(), 0);
}

#[test]
fn test_certificate_round_trip() {
    let mut directory = directory();
    let mut certificate = vec![0u8; 900];
    rand::rng().fill_bytes(&mut certificate);

    let handle = directory.save(LABEL_DEVICE_CERTIFICATE.as_bytes(), &certificate);
    assert!(handle.is_valid());

    let value = directory.get_value(handle).unwrap();
    assert!(value.len() <= READ_BUFFER_SIZE);
    assert_eq!(&value.as_bytes()[..certificate.len()], certificate.as_slice());
    assert!(!value.is_private());
    get_value_cleanup(Some(value));
}

#[test]
fn test_code_verification_key_scenario() {
    let mut directory = directory();

    let handle = directory.save(LABEL_CODE_VERIFICATION_KEY.as_bytes(), &[0u8; 32]);
    assert_eq!(handle, ObjectClass::CodeVerificationKey.handle());

    let value = directory.get_value(handle).unwrap();
    assert!(value.len() >= 32);
    assert_eq!(&value.as_bytes()[..32], &[0u8; 32]);
    get_value_cleanup(Some(value));
}

#[test]
fn test_device_failure_on_read_reports_handle_invalid() {
    let mut directory = directory();
    let handle = directory.save(LABEL_DEVICE_PUBLIC_KEY.as_bytes(), &[4u8; 65]);
    directory.secure_element_mut().fail_reads(0x8001);

    let err = directory.get_value(handle).unwrap_err();
    assert_eq!(err.return_value(), ReturnValue::KeyHandleInvalid);
}

#[test]
fn test_cleanup_of_nothing() {
    get_value_cleanup(None);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let element = FileSecureElement::open(dir.path()).unwrap();
        let mut directory = ObjectDirectory::new(element).unwrap();
        let handle = directory.save(LABEL_DEVICE_CERTIFICATE.as_bytes(), b"persisted cert");
        assert!(handle.is_valid());
    }

    let element = FileSecureElement::open(dir.path()).unwrap();
    let mut directory = ObjectDirectory::new(element).unwrap();
    let handle = directory.find(LABEL_DEVICE_CERTIFICATE.as_bytes());
    let value = directory.get_value(handle).unwrap();
    assert_eq!(value.as_bytes(), b"persisted cert");
}
