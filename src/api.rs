use tracing::{debug, trace};

use crate::config::LabelConfig;
use crate::error::SepalResult;
use crate::logic::{ObjectEntry, ObjectTable};
use crate::ports::SecureElement;
use crate::use_cases::{
    find_object as find_object_use_case, get_object_value as get_object_value_use_case,
    save_object as save_object_use_case,
};

pub use crate::model::*;

/// PKCS#11 object directory on top of a secure element
///
/// Owns the secure element context; every mediating call borrows the
/// directory mutably, so access to the device is serialized by the borrow
/// checker. Wrap the directory in a lock to share it between threads.
#[derive(Debug)]
pub struct ObjectDirectory<S> {
    table: ObjectTable,
    element: S,
}

impl<S: SecureElement> ObjectDirectory<S> {
    /// Directory with the build-time labels
    pub fn new(element: S) -> SepalResult<Self> {
        Self::with_config(element, &LabelConfig::default())
    }

    pub fn with_config(element: S, config: &LabelConfig) -> SepalResult<Self> {
        let table = ObjectTable::from_config(config)?;
        Ok(Self { table, element })
    }

    /// Handle of the object labelled `label`, or [`ObjectHandle::INVALID`]
    pub fn find(&self, label: &[u8]) -> ObjectHandle {
        self.try_find(label).unwrap_or_else(|e| {
            debug!("find: {}", e);
            ObjectHandle::INVALID
        })
    }

    pub fn try_find(&self, label: &[u8]) -> SepalResult<ObjectHandle> {
        find_object_use_case(&self.table, label)
    }

    /// Store `data` under `label`, returning the object handle or
    /// [`ObjectHandle::INVALID`] if nothing was stored
    pub fn save(&mut self, label: &[u8], data: &[u8]) -> ObjectHandle {
        self.try_save(label, data).unwrap_or_else(|e| {
            debug!("save: {}", e);
            ObjectHandle::INVALID
        })
    }

    pub fn try_save(&mut self, label: &[u8], data: &[u8]) -> SepalResult<ObjectHandle> {
        save_object_use_case(&self.table, &mut self.element, label, data)
    }

    /// Read the object behind `handle`
    ///
    /// On failure, [`SepalError::return_value`](crate::SepalError::return_value)
    /// gives the status to report to the token runtime.
    pub fn get_value(&mut self, handle: ObjectHandle) -> SepalResult<ObjectValue> {
        get_object_value_use_case(&self.table, &mut self.element, handle)
    }

    pub fn entries(&self) -> &[ObjectEntry] {
        self.table.entries()
    }

    pub fn secure_element(&self) -> &S {
        &self.element
    }

    pub fn secure_element_mut(&mut self) -> &mut S {
        &mut self.element
    }

    pub fn into_secure_element(self) -> S {
        self.element
    }
}

/// Release a value returned by [`ObjectDirectory::get_value`]
///
/// Dropping the value has the same effect; `None` is accepted and ignored.
pub fn get_value_cleanup(value: Option<ObjectValue>) {
    if let Some(value) = value {
        trace!("Releasing {} byte object value", value.len());
        drop(value);
    }
}
