//! Error types for sepal
//!
//! Errors are organized hierarchically and use thiserror for implementation.
//! The token-facing entry points collapse them into an invalid handle or a
//! [`ReturnValue`]; the detailed variants stay available to Rust callers.

use thiserror::Error;

use crate::model::{ObjectClass, ObjectHandle, Oid, ReturnValue};

/// Result type alias for sepal operations
pub type SepalResult<T> = Result<T, SepalError>;

/// Top-level error type for all sepal operations
#[derive(Error, Debug)]
pub enum SepalError {
    /// Secure element primitive errors
    #[error("Secure element error: {0}")]
    Device(#[from] DeviceError),

    /// Domain validation errors
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// Object directory errors
    #[error("Object directory error: {0}")]
    Directory(#[from] DirectoryError),
}

impl SepalError {
    /// The PKCS#11 return value reported for this error.
    ///
    /// Every failure on the read path surfaces as `CKR_KEY_HANDLE_INVALID`,
    /// including secure element failures.
    pub fn return_value(&self) -> ReturnValue {
        match self {
            SepalError::Device(_) => ReturnValue::KeyHandleInvalid,
            SepalError::Directory(DirectoryError::KeyHandleInvalid { .. })
            | SepalError::Directory(DirectoryError::NotTransferable { .. }) => {
                ReturnValue::KeyHandleInvalid
            }
            SepalError::Directory(DirectoryError::OutOfMemory { .. }) => ReturnValue::DeviceMemory,
            SepalError::Directory(_) | SepalError::Domain(_) => ReturnValue::FunctionFailed,
        }
    }
}

/// Failures reported by the secure element storage primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The device returned a non-success status word
    #[error("command on {oid} failed with status {status:#06X}")]
    Status { oid: Oid, status: u16 },

    /// No data object at the address
    #[error("no data object at {oid}")]
    NoSuchObject { oid: Oid },

    /// Offset beyond the current object length
    #[error("offset {offset} is beyond the {len} bytes stored in {oid}")]
    OffsetOutOfRange { oid: Oid, offset: usize, len: usize },

    /// Write would exceed the data object's capacity
    #[error("{oid} holds at most {capacity} bytes, {requested} requested")]
    CapacityExceeded {
        oid: Oid,
        capacity: usize,
        requested: usize,
    },

    /// Transport or backing store failure
    #[error("secure element I/O failed: {reason}")]
    Io { reason: String },
}

/// Domain validation errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Label error
    #[error("Label error: {0}")]
    Label(#[from] crate::model::LabelError),

    /// Slot address error
    #[error("Slot address error: {0}")]
    Oid(#[from] crate::model::OidError),
}

/// Object directory errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Label matches none of the known objects
    #[error("no object is labelled {label:?}")]
    UnknownLabel { label: String },

    /// Payload larger than any object the directory accepts
    #[error("object of {size} bytes exceeds the {max} byte limit")]
    ObjectTooLarge { size: usize, max: usize },

    /// Handle does not name a readable object
    #[error("object handle {handle} is invalid")]
    KeyHandleInvalid { handle: ObjectHandle },

    /// Object material never leaves the secure element
    #[error("the {class} cannot be exported")]
    NotTransferable { class: ObjectClass },

    /// Scratch buffer could not be reserved
    #[error("could not allocate {size} bytes for the object value")]
    OutOfMemory { size: usize },
}

impl From<crate::model::LabelError> for SepalError {
    fn from(err: crate::model::LabelError) -> Self {
        SepalError::Domain(DomainError::Label(err))
    }
}

impl From<crate::model::OidError> for SepalError {
    fn from(err: crate::model::OidError) -> Self {
        SepalError::Domain(DomainError::Oid(err))
    }
}

impl From<std::io::Error> for DeviceError {
    fn from(err: std::io::Error) -> Self {
        DeviceError::Io {
            reason: err.to_string(),
        }
    }
}
