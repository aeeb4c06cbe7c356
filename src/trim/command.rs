//! Functionality related to the `galore trim` command itself.

use tracing::{debug, info};

use super::builder;
use super::driver;
use super::params::TrimParams;

/// Main method for the `galore trim` subcommand.
///
/// Builds the Trim Galore invocation from the parameter set, runs it to
/// completion, and prints the resulting output descriptor to stdout as JSON.
pub fn trim(params: TrimParams) -> anyhow::Result<()> {
    info!("Starting trim command...");
    debug!("Arguments:");

    debug!("  [*] Forward reads: {}", params.input_forward.display());
    debug!("  [*] Reverse reads: {}", params.input_reverse.display());
    debug!("  [*] Program: {}", params.program.display());
    debug!("  [*] Destination: {:?}", params.output_directory);

    let args = builder::build(&params);
    debug!("Invocation: {}", args.join(" "));

    let descriptor = driver::run(&args, params.output_directory.as_deref())?;
    info!(
        "Staged output at {} for publication to {}.",
        descriptor.local_dir.display(),
        descriptor.destination
    );

    println!("{}", serde_json::to_string_pretty(&descriptor)?);

    Ok(())
}
