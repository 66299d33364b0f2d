//! CLI module for verdict - command-line interface and subcommands.

pub mod commands;

pub use commands::{Cli, Commands, UserArgs};
