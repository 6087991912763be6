//! String-keyed property tables.
//!
//! - [`table`] - [`PropertyTable`], an owned table passed around explicitly
//! - [`system`] - [`SystemProperties`], the process-wide table
//! - [`keys`] - well-known keys seeded into the process-wide table
//!
//! [`get_property`] and [`set_property`] operate on the process-wide table.
//!
//! # Example
//!
//! ```
//! use propkit::properties::{get_property, set_property};
//!
//! set_property("example.mode", Some("dev"), None::<fn() -> String>).unwrap();
//! assert_eq!(get_property("example.mode", None::<fn() -> String>), Some("dev".to_string()));
//!
//! let port = get_property("example.port", Some(|| "8080".to_string()));
//! assert_eq!(port, Some("8080".to_string()));
//! ```

pub mod keys;
pub mod system;
pub mod table;

pub use system::{system, SystemProperties};
pub use table::PropertyTable;

use crate::error::Result;

/// Look up `key` in the process-wide table.
///
/// See [`SystemProperties::get_property`].
pub fn get_property<F>(key: &str, default: Option<F>) -> Option<String>
where
    F: FnOnce() -> String,
{
    system().get_property(key, default)
}

/// Store a value under `key` in the process-wide table.
///
/// See [`SystemProperties::set_property`].
///
/// # Errors
///
/// Returns `ContractViolation` if both `value` and `default` are absent.
pub fn set_property<F>(key: &str, value: Option<&str>, default: Option<F>) -> Result<String>
where
    F: FnOnce() -> String,
{
    system().set_property(key, value, default)
}
