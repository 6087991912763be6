//! Get command implementation.
//!
//! The `propkit get` command prints a single property.

use crate::cli::args::GetArgs;
use crate::error::Result;
use crate::properties::SystemProperties;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The get command implementation.
pub struct GetCommand<'a> {
    properties: &'a SystemProperties,
    args: GetArgs,
}

impl<'a> GetCommand<'a> {
    /// Create a new get command.
    pub fn new(properties: &'a SystemProperties, args: GetArgs) -> Self {
        Self { properties, args }
    }
}

impl Command for GetCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let default = self.args.default.clone().map(|value| move || value);

        match self.properties.get_property(&self.args.key, default) {
            Some(value) => {
                ui.message(&value);
                Ok(CommandResult::success())
            }
            None => {
                ui.error(&format!("Property not found: {}", self.args.key));
                Ok(CommandResult::failure(2))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyTable;
    use crate::ui::MockUI;

    fn props() -> SystemProperties {
        SystemProperties::new([("app.mode", "prod")].into_iter().collect::<PropertyTable>())
    }

    fn args(key: &str, default: Option<&str>) -> GetArgs {
        GetArgs {
            key: key.to_string(),
            default: default.map(str::to_string),
        }
    }

    #[test]
    fn prints_existing_value() {
        let props = props();
        let cmd = GetCommand::new(&props, args("app.mode", Some("dev")));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), ["prod"]);
    }

    #[test]
    fn prints_default_on_miss() {
        let props = props();
        let cmd = GetCommand::new(&props, args("app.port", Some("8080")));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages(), ["8080"]);
        assert!(!props.contains_key("app.port"));
    }

    #[test]
    fn missing_without_default_fails() {
        let props = props();
        let cmd = GetCommand::new(&props, args("app.port", None));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.errors()[0].contains("app.port"));
    }
}
