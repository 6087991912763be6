//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};

use crate::error::{PropkitError, Result};
use crate::predicates::is_blank_or_absent;

/// propkit - Inspect text predicates and process properties.
#[derive(Debug, Parser)]
#[command(name = "propkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Define a property before the command runs (repeatable)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", global = true)]
    pub define: Vec<String>,

    /// Load environment variables starting with PREFIX as properties
    #[arg(long, value_name = "PREFIX", env = "PROPKIT_ENV_PREFIX", global = true)]
    pub env_prefix: Option<String>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse every `-D KEY=VALUE` definition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDefinition` for the first malformed definition.
    pub fn definitions(&self) -> Result<Vec<(String, String)>> {
        self.define.iter().map(String::as_str).map(parse_definition).collect()
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List properties (default if no command specified)
    List(ListArgs),

    /// Print one property
    Get(GetArgs),

    /// Store a property and print the stored value
    Set(SetArgs),

    /// Report which text predicates hold for a value
    Check(CheckArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only list keys starting with PREFIX
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    /// Property key
    pub key: String,

    /// Value to print when the key is missing
    #[arg(long)]
    pub default: Option<String>,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetArgs {
    /// Property key
    pub key: String,

    /// Value to store
    pub value: Option<String>,

    /// Value to store when VALUE is not given
    #[arg(long)]
    pub default: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Text to check (absent if omitted)
    pub text: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse a `KEY=VALUE` definition.
///
/// The key is trimmed and must carry visible text; the value is kept as
/// given and may be empty.
///
/// # Errors
///
/// Returns `InvalidDefinition` if there is no `=` or the key is blank.
pub fn parse_definition(definition: &str) -> Result<(String, String)> {
    let invalid = || PropkitError::InvalidDefinition {
        definition: definition.to_string(),
    };

    let (key, value) = definition.split_once('=').ok_or_else(invalid)?;
    let key = key.trim();
    if is_blank_or_absent(Some(key)) {
        return Err(invalid());
    }

    Ok((key.to_string(), value.to_string()))
}
