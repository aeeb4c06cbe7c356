//! Execution of a built invocation and staging of its output.
//!
//! The driver is deliberately thin: it runs the argument list as a single
//! blocking child process, then pairs the local staging directory with the
//! resolved destination. A nonzero exit from the external tool is not a
//! failure at this layer; the staged directory is published as-is and
//! whatever consumes it decides whether the run produced usable output. The
//! only hard failure is the process launch itself (e.g. a missing binary).

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::{debug, warn};

use super::{DEFAULT_DESTINATION, STAGING_DIR};

//===================//
// Output descriptor //
//===================//

/// The terminal artifact of a trim run: the local directory the external tool
/// wrote into, paired with the logical location it should be published to.
/// Immutable once constructed.
#[derive(Debug, Serialize)]
pub struct OutputDescriptor {
    /// Local directory the external tool was instructed to write into.
    pub local_dir: PathBuf,

    /// Logical destination the staged output is published to.
    pub destination: String,
}

//========================//
// Destination resolution //
//========================//

/// Strips a single trailing path separator from a destination location.
/// Anything else, including a location with no trailing separator, passes
/// through unchanged.
pub fn normalize_destination(location: &str) -> &str {
    location.strip_suffix('/').unwrap_or(location)
}

//===========//
// Execution //
//===========//

/// Runs a fully built invocation to completion, then wraps the staging
/// directory together with the resolved destination.
///
/// The first element of `args` is the program; the rest are its arguments.
/// The child's standard output is discarded and its standard error is
/// inherited, so the external tool's own diagnostics still reach the user.
pub fn run(args: &[String], output_directory: Option<&str>) -> anyhow::Result<OutputDescriptor> {
    let (program, arguments) = match args.split_first() {
        Some(parts) => parts,
        None => bail!("cannot run an empty argument list"),
    };

    debug!("Running {} with {} arguments.", program, arguments.len());

    let status = Command::new(program)
        .args(arguments)
        .stdout(Stdio::null())
        .status()
        .with_context(|| format!("spawning {}", program))?;

    if !status.success() {
        warn!("{} exited with {}.", program, status);
    }

    let destination = match output_directory {
        Some(location) => String::from(normalize_destination(location)),
        None => String::from(DEFAULT_DESTINATION),
    };

    Ok(OutputDescriptor {
        local_dir: PathBuf::from(STAGING_DIR),
        destination,
    })
}
