use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use git_testament::{git_testament, render_testament};

use galore::describe::command::{describe, DescribeArgs};
use galore::trim::command::trim;
use galore::trim::params::TrimParams;

git_testament!(TESTAMENT);

/// Quality and adapter trimming of paired-end sequencing reads.
#[derive(Parser)]
#[command(name = "galore", propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    subcommand: Subcommands,

    /// Only errors are printed to the stderr stream.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// All available information, including debug information, is printed to
    /// stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// All possible subcommands for `galore`.
#[derive(Subcommand)]
enum Subcommands {
    /// Quality and adapter trims a pair of FASTQ files with Trim Galore.
    Trim(TrimParams),

    /// Describes the workflow's parameter surface.
    Describe(DescribeArgs),
}

fn main() -> anyhow::Result<()> {
    let version = render_testament!(TESTAMENT);

    let matches = Cli::command().version(version).get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let mut level = tracing::Level::INFO;
    if cli.quiet {
        level = tracing::Level::ERROR;
    } else if cli.verbose {
        level = tracing::Level::DEBUG;
    }

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.subcommand {
        Subcommands::Trim(params) => trim(params),
        Subcommands::Describe(args) => describe(args),
    }
}
