//! CLI module for lapr - command-line flags.

pub mod commands;

pub use commands::Cli;
