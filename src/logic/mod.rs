//! Pure logic (no device access)

mod object_table;

pub use object_table::{ObjectEntry, ObjectTable};
