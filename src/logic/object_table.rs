//! The fixed table of directory objects
//!
//! Built once from a [`LabelConfig`]; every lookup afterwards is a pure
//! classification against it.

use tracing::{debug, warn};

use crate::config::LabelConfig;
use crate::error::SepalResult;
use crate::model::{Label, ObjectClass, ObjectHandle, Oid, OidError};

/// One row of the directory: an object class, its label and its data object
#[derive(Debug, Clone)]
pub struct ObjectEntry {
    class: ObjectClass,
    label: Label,
    slot_address: String,
    slot: Result<Oid, OidError>,
}

impl ObjectEntry {
    pub fn class(&self) -> ObjectClass {
        self.class
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn handle(&self) -> ObjectHandle {
        self.class.handle()
    }

    pub fn slot_address(&self) -> &str {
        &self.slot_address
    }

    /// Data object backing the entry, or why the slot address is unusable
    pub fn slot(&self) -> Result<Oid, OidError> {
        self.slot.clone()
    }

    pub fn is_transferable(&self) -> bool {
        self.class.is_transferable()
    }
}

#[derive(Debug, Clone)]
pub struct ObjectTable {
    entries: Vec<ObjectEntry>,
}

impl ObjectTable {
    /// Build the table from configured labels.
    ///
    /// Slot addresses are resolved here, but an unusable address only fails
    /// transfers for that entry; lookups by label keep working.
    ///
    /// # Errors
    ///
    /// Returns `SepalError::Domain` if a label is empty or too long
    pub fn from_config(config: &LabelConfig) -> SepalResult<Self> {
        let mut entries = Vec::with_capacity(ObjectClass::ALL.len());

        for class in ObjectClass::ALL {
            let entry = config.entry(class);
            let label = Label::from_str(&entry.label)?;
            let slot = Oid::parse(&entry.slot_address);

            match &slot {
                Ok(oid) => debug!("{} labelled {} maps to {}", class, label, oid),
                Err(e) if class.is_transferable() => {
                    warn!("{} labelled {} has no usable slot: {}", class, label, e)
                }
                Err(_) => debug!("{} labelled {} stays on chip", class, label),
            }

            if let Some(earlier) = entries.iter().find(|e: &&ObjectEntry| e.label == label) {
                warn!(
                    "{} shares label {} with the {}, lookups resolve to the {}",
                    class, label, earlier.class, earlier.class
                );
            }

            entries.push(ObjectEntry {
                class,
                label,
                slot_address: entry.slot_address.clone(),
                slot,
            });
        }

        Ok(Self { entries })
    }

    /// First entry whose label equals `label`
    pub fn classify(&self, label: &[u8]) -> Option<&ObjectEntry> {
        self.entries.iter().find(|entry| entry.label.matches(label))
    }

    pub fn entry(&self, class: ObjectClass) -> &ObjectEntry {
        // from_config pushes one entry per class, in ObjectClass::ALL order
        &self.entries[class.index()]
    }

    pub fn entries(&self) -> &[ObjectEntry] {
        &self.entries
    }
}
