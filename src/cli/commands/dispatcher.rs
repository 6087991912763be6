//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::error::Result;
use crate::predicates::is_not_blank;
use crate::properties::SystemProperties;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    properties: &'a SystemProperties,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher working on the given property table.
    pub fn new(properties: &'a SystemProperties) -> Self {
        Self { properties }
    }

    /// Apply the global property flags.
    ///
    /// Environment variables matching `--env-prefix` are loaded first, so
    /// `-D` definitions override them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDefinition` if a `-D` definition is malformed. No
    /// definition is applied in that case.
    pub fn configure(&self, cli: &Cli) -> Result<()> {
        let definitions = cli.definitions()?;

        if let Some(prefix) = cli.env_prefix.as_deref() {
            if is_not_blank(Some(prefix)) {
                let loaded = self.properties.load_env(prefix, std::env::vars());
                tracing::debug!("Loaded {} properties with prefix {}", loaded, prefix);
            }
        }

        for (key, value) in definitions {
            self.properties.set(key, value);
        }

        Ok(())
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self.properties, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Get(args)) => {
                let cmd = super::get::GetCommand::new(self.properties, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Set(args)) => {
                let cmd = super::set::SetCommand::new(self.properties, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to listing everything
                let cmd = super::list::ListCommand::new(self.properties, ListArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyTable;
    use crate::ui::MockUI;
    use clap::Parser;

    fn props() -> SystemProperties {
        SystemProperties::new([("os.name", "testos")].into_iter().collect::<PropertyTable>())
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn configure_applies_definitions() {
        let props = props();
        let dispatcher = CommandDispatcher::new(&props);
        let cli = Cli::parse_from(["propkit", "-D", "app.mode=dev", "-D", "os.name=custom"]);

        dispatcher.configure(&cli).unwrap();

        assert_eq!(props.get("app.mode"), Some("dev".to_string()));
        assert_eq!(props.get("os.name"), Some("custom".to_string()));
    }

    #[test]
    fn configure_rejects_bad_definition_without_applying_any() {
        let props = props();
        let dispatcher = CommandDispatcher::new(&props);
        let cli = Cli::parse_from(["propkit", "-D", "good=1", "-D", "bad"]);

        assert!(dispatcher.configure(&cli).is_err());
        assert!(!props.contains_key("good"));
    }

    #[test]
    fn no_command_lists_properties() {
        let props = props();
        let dispatcher = CommandDispatcher::new(&props);
        let cli = Cli::parse_from(["propkit"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), ["os.name --- testos"]);
    }

    #[test]
    fn dispatches_get() {
        let props = props();
        let dispatcher = CommandDispatcher::new(&props);
        let cli = Cli::parse_from(["propkit", "get", "os.name"]);
        let mut ui = MockUI::new();

        dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(ui.messages(), ["testos"]);
    }

    #[test]
    fn dispatches_set_on_given_table() {
        let props = props();
        let dispatcher = CommandDispatcher::new(&props);
        let cli = Cli::parse_from(["propkit", "set", "app.mode", "dev"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(props.get("app.mode"), Some("dev".to_string()));
    }
}
