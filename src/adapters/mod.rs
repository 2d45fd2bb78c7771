//! Adapters - concrete implementations of ports (traits)

mod data_object;
mod file;
mod memory;

pub use file::FileSecureElement;
pub use memory::MemorySecureElement;
