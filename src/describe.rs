//! Functionality related to the `galore describe` subcommand.

pub mod command;
