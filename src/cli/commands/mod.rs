//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which applies the
//! global property flags and routes CLI subcommands to their
//! implementations.

pub mod check;
pub mod dispatcher;
pub mod get;
pub mod list;
pub mod set;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
