//! PKCS#11 object directory backed by secure element data objects.
//!
//! Maps the four objects a device exposes to a token runtime (device
//! certificate, device key pair, code verification key) onto fixed data
//! objects of a secure element. Lookups are pure label classification; reads
//! and writes go through the [`ports::SecureElement`] port, and the device
//! private key never leaves the chip.
//!
//! ```no_run
//! use sepal::adapters::FileSecureElement;
//! use sepal::config::LABEL_DEVICE_CERTIFICATE;
//! use sepal::ObjectDirectory;
//!
//! # fn main() -> sepal::SepalResult<()> {
//! let element = FileSecureElement::open("store")?;
//! let mut directory = ObjectDirectory::new(element)?;
//!
//! let handle = directory.save(LABEL_DEVICE_CERTIFICATE.as_bytes(), b"...");
//! let value = directory.get_value(handle)?;
//! sepal::get_value_cleanup(Some(value));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod api;
pub mod config;
pub mod error;
mod logic;
pub mod model;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::{SepalError, SepalResult};
pub use logic::{ObjectEntry, ObjectTable};

// Re-export public API
pub use api::{get_value_cleanup, ObjectDirectory};
