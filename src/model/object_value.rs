use std::fmt;
use zeroize::Zeroizing;

/// Bytes read out of a data object, owned by the caller.
///
/// The buffer is wiped and released when the value is dropped or handed to
/// [`crate::api::get_value_cleanup`].
#[derive(Clone, PartialEq, Eq)]
pub struct ObjectValue {
    data: Zeroizing<Vec<u8>>,
    is_private: bool,
}

impl ObjectValue {
    pub(crate) fn new(data: Zeroizing<Vec<u8>>, is_private: bool) -> Self {
        Self { data, is_private }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `CKA_PRIVATE` as reported to the token interface
    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl AsRef<[u8]> for ObjectValue {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValue")
            .field("len", &self.data.len())
            .field("is_private", &self.is_private)
            .finish()
    }
}
