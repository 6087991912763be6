//! Presence and text predicates.
//!
//! - [`value`] - presence checks for any `Option<T>`
//! - [`text`] - emptiness and blankness checks for optional text
//!
//! # Example
//!
//! ```
//! use propkit::predicates::{has_visible_text, is_absent, is_blank_or_absent, is_empty_or_absent};
//!
//! assert!(is_absent(&None::<u32>));
//! assert!(is_empty_or_absent(Some("")));
//! assert!(!is_empty_or_absent(Some(" ")));
//! assert!(is_blank_or_absent(Some(" \t\n")));
//! assert!(has_visible_text("  x "));
//! ```

pub mod text;
pub mod value;

pub use text::{
    has_visible_text, is_blank_or_absent, is_empty_or_absent, is_not_blank, is_not_empty,
};
pub use value::{is_absent, is_present};
