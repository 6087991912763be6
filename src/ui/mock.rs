//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.successes.push(msg.to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.warnings.push(msg.to_string());
        }
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_and_errors() {
        let mut ui = MockUI::new();
        ui.message("a");
        ui.success("b");
        ui.warning("c");
        ui.error("d");

        assert_eq!(ui.messages(), ["a"]);
        assert_eq!(ui.successes(), ["b"]);
        assert_eq!(ui.warnings(), ["c"]);
        assert_eq!(ui.errors(), ["d"]);
    }

    #[test]
    fn quiet_mode_drops_status() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("data");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");

        assert_eq!(ui.messages(), ["data"]);
        assert!(ui.successes().is_empty());
        assert!(ui.warnings().is_empty());
        assert_eq!(ui.errors(), ["broken"]);
    }
}
