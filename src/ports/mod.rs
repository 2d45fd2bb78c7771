//! Ports (traits) for secure element access
//!
//! The directory depends on these abstractions, not on a particular
//! transport. Adapters implement them for real devices, emulators and tests.

mod secure_element;

pub use secure_element::{SecureElement, WriteMode, DEFAULT_OBJECT_CAPACITY};
