use std::fmt;
use thiserror::Error;

/// PKCS#11 `CKA_LABEL` value naming one of the directory's objects
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Label(Vec<u8>);

impl Label {
    /// Labels travel through the token interface with a one-byte length.
    pub const MAX_LENGTH: usize = u8::MAX as usize;

    pub fn new(label: Vec<u8>) -> Result<Self, LabelError> {
        if label.is_empty() {
            return Err(LabelError::Empty);
        }
        if label.len() > Self::MAX_LENGTH {
            return Err(LabelError::TooLong { len: label.len() });
        }
        Ok(Self(label))
    }

    pub fn from_str(label: &str) -> Result<Self, LabelError> {
        Self::new(label.as_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Exact comparison against a caller supplied label.
    ///
    /// Callers built on C strings often pass the terminator along, so a single
    /// trailing NUL on `candidate` is ignored. Prefixes never match.
    pub fn matches(&self, candidate: &[u8]) -> bool {
        let candidate = match candidate {
            [head @ .., 0] => head,
            other => other,
        };
        candidate == self.0.as_slice()
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    #[error("label must not be empty")]
    Empty,

    #[error("label is {len} bytes, at most {max} allowed", max = Label::MAX_LENGTH)]
    TooLong { len: usize },
}
