//! Check command implementation.
//!
//! The `propkit check` command reports which text predicates hold for a
//! value. Omitting the value checks the absent case.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::{PropkitError, Result};
use crate::predicates::{is_blank_or_absent, is_empty_or_absent, is_not_blank, is_present};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Predicate results for one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextReport {
    /// The text was given.
    pub present: bool,
    /// Absent or zero length.
    pub empty_or_absent: bool,
    /// Absent or whitespace only.
    pub blank_or_absent: bool,
    /// Contains a non-whitespace character.
    pub has_visible_text: bool,
}

impl TextReport {
    /// Evaluate every predicate for `text`.
    pub fn new(text: Option<&str>) -> Self {
        Self {
            present: is_present(&text),
            empty_or_absent: is_empty_or_absent(text),
            blank_or_absent: is_blank_or_absent(text),
            has_visible_text: is_not_blank(text),
        }
    }

    fn lines(&self) -> [(&'static str, bool); 4] {
        [
            ("present", self.present),
            ("empty_or_absent", self.empty_or_absent),
            ("blank_or_absent", self.blank_or_absent),
            ("has_visible_text", self.has_visible_text),
        ]
    }
}

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = TextReport::new(self.args.text.as_deref());

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| PropkitError::Other(e.into()))?;
            ui.message(&json);
        } else {
            for (name, value) in report.lines() {
                ui.message(&format!("{}: {}", name, value));
            }
        }

        Ok(CommandResult::success())
    }
}
