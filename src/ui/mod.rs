//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for writing to the terminal
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use propkit::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("os.name --- linux");
//! ui.error("Property not found: app.mode");
//!
//! assert_eq!(ui.messages(), ["os.name --- linux"]);
//! assert_eq!(ui.errors().len(), 1);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PropkitTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show data and status messages.
    #[default]
    Normal,
    /// Show data and errors only.
    Quiet,
}

impl OutputMode {
    /// Whether status messages (success, warning) are shown.
    pub fn shows_status(self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Trait for user interface interactions.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display command output. Always shown.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);
}
