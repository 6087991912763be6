//! Command-line interface for propkit.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{parse_definition, CheckArgs, Cli, Commands, GetArgs, ListArgs, SetArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
