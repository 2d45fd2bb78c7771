//! Byte-level data object semantics shared by the emulated elements

use crate::error::{DeviceError, SepalResult};
use crate::model::Oid;
use crate::ports::WriteMode;

/// Contents of the object at `oid` after a write.
pub(crate) fn apply_write(
    oid: Oid,
    current: Option<&[u8]>,
    capacity: usize,
    mode: WriteMode,
    offset: u8,
    data: &[u8],
) -> SepalResult<Vec<u8>> {
    let offset = usize::from(offset);
    let end = offset + data.len();
    if end > capacity {
        return Err(DeviceError::CapacityExceeded {
            oid,
            capacity,
            requested: end,
        }
        .into());
    }

    let mut contents = match mode {
        WriteMode::EraseAndWrite => Vec::with_capacity(end),
        WriteMode::WriteOnly => current.map(<[u8]>::to_vec).unwrap_or_default(),
    };

    if offset > contents.len() {
        match mode {
            WriteMode::EraseAndWrite => contents.resize(offset, 0),
            WriteMode::WriteOnly => {
                return Err(DeviceError::OffsetOutOfRange {
                    oid,
                    offset,
                    len: contents.len(),
                }
                .into())
            }
        }
    }

    if contents.len() < end {
        contents.resize(end, 0);
    }
    contents[offset..end].copy_from_slice(data);
    Ok(contents)
}

/// Copy the object's bytes from `offset` into `buffer`, returning the count.
pub(crate) fn copy_out(
    oid: Oid,
    contents: &[u8],
    offset: u8,
    buffer: &mut [u8],
) -> SepalResult<usize> {
    let offset = usize::from(offset);
    if offset > contents.len() {
        return Err(DeviceError::OffsetOutOfRange {
            oid,
            offset,
            len: contents.len(),
        }
        .into());
    }

    let available = &contents[offset..];
    let len = available.len().min(buffer.len());
    buffer[..len].copy_from_slice(&available[..len]);
    Ok(len)
}
