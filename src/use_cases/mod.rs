//! Use cases (orchestration)
//!
//! Each use case resolves an object through the [`ObjectTable`] and, where
//! the object may leave the chip, drives the secure element port.
//!
//! [`ObjectTable`]: crate::logic::ObjectTable

mod find_object;
mod get_object_value;
mod save_object;

pub use find_object::find_object;
pub use get_object_value::{get_object_value, READ_BUFFER_SIZE};
pub use save_object::{save_object, MAX_OBJECT_SIZE};
