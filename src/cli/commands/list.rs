//! List command implementation.
//!
//! The `propkit list` command prints every property as `key --- value`.

use std::collections::BTreeMap;

use crate::cli::args::ListArgs;
use crate::error::{PropkitError, Result};
use crate::properties::SystemProperties;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    properties: &'a SystemProperties,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(properties: &'a SystemProperties, args: ListArgs) -> Self {
        Self { properties, args }
    }

    fn selected(&self) -> Vec<(String, String)> {
        let prefix = self.args.prefix.as_deref().unwrap_or_default();
        self.properties
            .entries()
            .into_iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .collect()
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = self.selected();

        if self.args.json {
            let map: BTreeMap<_, _> = entries.into_iter().collect();
            let json =
                serde_json::to_string_pretty(&map).map_err(|e| PropkitError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.warning("No properties found");
        }
        for (key, value) in &entries {
            ui.message(&format!("{} --- {}", key, value));
        }

        Ok(CommandResult::success())
    }
}
