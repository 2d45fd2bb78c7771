//! Get object value use case

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::error::{DirectoryError, SepalResult};
use crate::logic::ObjectTable;
use crate::model::{ObjectClass, ObjectHandle, ObjectValue};
use crate::ports::SecureElement;

/// Size of the scratch buffer a read is performed into
pub const READ_BUFFER_SIZE: usize = 1200;

/// Read the data object behind `handle`
///
/// A fresh [`READ_BUFFER_SIZE`] buffer is reserved for every call and
/// returned to the caller trimmed to the length the secure element reports.
/// Readable objects are never marked private.
///
/// # Errors
///
/// Returns errors if:
/// - `handle` names no object, or names the device private key
/// - The object's slot address is unusable
/// - The scratch buffer cannot be reserved
/// - The secure element rejects the read
///
/// All of these report `CKR_KEY_HANDLE_INVALID` through
/// [`SepalError::return_value`](crate::SepalError::return_value), except the
/// allocation failure, which reports `CKR_DEVICE_MEMORY`.
pub fn get_object_value<S>(
    table: &ObjectTable,
    element: &mut S,
    handle: ObjectHandle,
) -> SepalResult<ObjectValue>
where
    S: SecureElement + ?Sized,
{
    let class =
        ObjectClass::from_handle(handle).ok_or(DirectoryError::KeyHandleInvalid { handle })?;
    let entry = table.entry(class);

    if !entry.is_transferable() {
        debug!("Refusing to export the {}", class);
        return Err(DirectoryError::NotTransferable { class }.into());
    }

    let oid = entry.slot().map_err(|e| {
        debug!("The {} has no usable slot: {}", class, e);
        DirectoryError::KeyHandleInvalid { handle }
    })?;

    let mut buffer = Zeroizing::new(Vec::new());
    buffer
        .try_reserve_exact(READ_BUFFER_SIZE)
        .map_err(|_| DirectoryError::OutOfMemory {
            size: READ_BUFFER_SIZE,
        })?;
    buffer.resize(READ_BUFFER_SIZE, 0);

    let len = element.read_data(oid, 0, &mut buffer).map_err(|e| {
        warn!("Reading the {} from {} failed: {}", class, oid, e);
        e
    })?;
    buffer.truncate(len.min(READ_BUFFER_SIZE));

    debug!("Read {} bytes of the {} from {}", buffer.len(), class, oid);
    Ok(ObjectValue::new(buffer, false))
}
