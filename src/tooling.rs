//! Tooling Layer
//!
//! Command-line interface over the roster library.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
