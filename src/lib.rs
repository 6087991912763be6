//! propkit - Presence and text predicates with process-wide properties.
//!
//! propkit answers two small questions that come up everywhere: "is this
//! value there?" and "does this text say anything?". It also provides a
//! string-keyed property table, either owned and passed around explicitly
//! or shared by the whole process.
//!
//! # Modules
//!
//! - [`predicates`] - Presence, emptiness and blankness checks
//! - [`properties`] - Property tables with lazily computed defaults
//! - [`error`] - Error types and result aliases
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use propkit::predicates::is_blank_or_absent;
//! use propkit::properties::PropertyTable;
//!
//! let mut table = PropertyTable::new();
//! table.insert("greeting", "   ");
//!
//! let greeting = table.get("greeting");
//! assert!(is_blank_or_absent(greeting));
//! assert_eq!(table.get_or_else("name", || "world".to_string()), "world");
//! ```

pub mod cli;
pub mod error;
pub mod predicates;
pub mod properties;
pub mod ui;

pub use error::{PropkitError, Result};
