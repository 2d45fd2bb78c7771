//! Save object use case
//!
//! Writes a certificate or public key into the data object reserved for its
//! label. The device private key is accepted but never written: it is
//! generated inside the secure element and cannot be imported.

use tracing::{debug, info};

use crate::error::{DirectoryError, SepalResult};
use crate::logic::ObjectTable;
use crate::model::{ObjectHandle, Oid};
use crate::ports::{SecureElement, WriteMode};

/// Largest object the directory accepts, in bytes
pub const MAX_OBJECT_SIZE: usize = 2048;

/// Store `data` under the object labelled `label`
///
/// The write uses erase-and-write mode at offset 0, so nothing of the
/// previous contents survives.
///
/// # Arguments
///
/// * `table` - The directory's object table
/// * `element` - Secure element holding the data objects
/// * `label` - PKCS#11 label of the object
/// * `data` - New object contents
///
/// # Returns
///
/// The handle of the object's class
///
/// # Errors
///
/// Returns errors if:
/// - `data` is longer than [`MAX_OBJECT_SIZE`]
/// - No object carries `label`
/// - The object's slot address is unusable
/// - The secure element rejects the write
pub fn save_object<S>(
    table: &ObjectTable,
    element: &mut S,
    label: &[u8],
    data: &[u8],
) -> SepalResult<ObjectHandle>
where
    S: SecureElement + ?Sized,
{
    if data.len() > MAX_OBJECT_SIZE {
        return Err(DirectoryError::ObjectTooLarge {
            size: data.len(),
            max: MAX_OBJECT_SIZE,
        }
        .into());
    }

    let entry = table.classify(label).ok_or_else(|| DirectoryError::UnknownLabel {
        label: String::from_utf8_lossy(label).into_owned(),
    })?;

    if !entry.is_transferable() {
        debug!("Accepting the {} without storing it", entry.class());
        return Ok(entry.handle());
    }

    let oid = entry.slot()?;
    if data.len() >= usize::from(Oid::LIMIT) {
        return Err(DirectoryError::ObjectTooLarge {
            size: data.len(),
            max: usize::from(Oid::LIMIT) - 1,
        }
        .into());
    }

    element.write_data(oid, WriteMode::EraseAndWrite, 0, data)?;

    info!("Stored {} bytes of the {} in {}", data.len(), entry.class(), oid);
    Ok(entry.handle())
}
