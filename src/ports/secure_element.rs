//! SecureElement trait - capability to read and write data objects

use crate::error::SepalResult;
use crate::model::Oid;

/// Largest general purpose data object on the supported devices
pub const DEFAULT_OBJECT_CAPACITY: usize = 1728;

/// How a write treats the bytes already stored in the object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Overwrite in place, keeping bytes outside the written range
    WriteOnly,
    /// Clear the object before writing so no stale bytes remain
    EraseAndWrite,
}

impl WriteMode {
    /// Mode parameter of the device's set-data command
    pub const fn code(self) -> u8 {
        match self {
            WriteMode::WriteOnly => 0x00,
            WriteMode::EraseAndWrite => 0x40,
        }
    }
}

/// Storage primitives of a secure element
///
/// Calls block for the duration of one device transaction. There is no
/// retry; any error is final for that call.
pub trait SecureElement {
    /// Write `data` into the object at `oid`, starting at `offset`
    ///
    /// # Errors
    ///
    /// Returns `SepalError::Device` if the device rejects the command or the
    /// write does not fit the object
    fn write_data(
        &mut self,
        oid: Oid,
        mode: WriteMode,
        offset: u8,
        data: &[u8],
    ) -> SepalResult<()>;

    /// Read the object at `oid` from `offset` into `buffer`
    ///
    /// # Returns
    ///
    /// The number of bytes written into `buffer`, at most `buffer.len()`
    ///
    /// # Errors
    ///
    /// Returns `SepalError::Device` if the object does not exist or the
    /// device rejects the command
    fn read_data(&mut self, oid: Oid, offset: u8, buffer: &mut [u8]) -> SepalResult<usize>;
}

impl<S: SecureElement + ?Sized> SecureElement for &mut S {
    fn write_data(
        &mut self,
        oid: Oid,
        mode: WriteMode,
        offset: u8,
        data: &[u8],
    ) -> SepalResult<()> {
        (**self).write_data(oid, mode, offset, data)
    }

    fn read_data(&mut self, oid: Oid, offset: u8, buffer: &mut [u8]) -> SepalResult<usize> {
        (**self).read_data(oid, offset, buffer)
    }
}

impl<S: SecureElement + ?Sized> SecureElement for Box<S> {
    fn write_data(
        &mut self,
        oid: Oid,
        mode: WriteMode,
        offset: u8,
        data: &[u8],
    ) -> SepalResult<()> {
        (**self).write_data(oid, mode, offset, data)
    }

    fn read_data(&mut self, oid: Oid, offset: u8, buffer: &mut [u8]) -> SepalResult<usize> {
        (**self).read_data(oid, offset, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_mode_codes() {
        assert_eq!(WriteMode::WriteOnly.code(), 0x00);
        assert_eq!(WriteMode::EraseAndWrite.code(), 0x40);
    }
}
