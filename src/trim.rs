//! Functionality related to the `galore trim` subcommand.

pub mod builder;
pub mod command;
pub mod driver;
pub mod params;

/// Program invoked when no override is given. Resolved through `PATH` by the
/// operating system, not by this crate.
pub const DEFAULT_PROGRAM: &str = "trim_galore";

/// Local directory name Trim Galore is instructed to write its output into.
pub const STAGING_DIR: &str = "trim_galore_out";

/// Destination the staged output is published to when no override is given.
pub const DEFAULT_DESTINATION: &str = "trim-galore-output";
