//! Command line surface of the `note` binary
//!
//! - [`commands`] - clap definitions and handlers for `switch`, `log`, `shot`, `status`
//! - [`operations`] - The underlying operations, with paths and context passed explicitly
//! - [`prompt`] - Interactive section and caption prompts

pub mod commands;
pub mod operations;
pub mod prompt;

pub use commands::{Cli, Commands, run};
