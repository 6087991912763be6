//! Set command implementation.
//!
//! The `propkit set` command stores a property and prints the stored value.

use crate::cli::args::SetArgs;
use crate::error::Result;
use crate::properties::SystemProperties;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The set command implementation.
pub struct SetCommand<'a> {
    properties: &'a SystemProperties,
    args: SetArgs,
}

impl<'a> SetCommand<'a> {
    /// Create a new set command.
    pub fn new(properties: &'a SystemProperties, args: SetArgs) -> Self {
        Self { properties, args }
    }
}

impl Command for SetCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let default = self.args.default.clone().map(|value| move || value);
        let stored = self
            .properties
            .set_property(&self.args.key, self.args.value.as_deref(), default)?;

        ui.message(&stored);
        ui.success(&format!("Set {}", self.args.key));
        Ok(CommandResult::success())
    }
}
