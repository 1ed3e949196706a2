//! vbump - CLI entry point.
//!
//! Typical use is rewriting a `VERSION` file in place:
//!
//! ```text
//! vbump "$(cat VERSION)" --minor > VERSION
//! ```

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use vbump::version::{BumpTarget, bump};

/// Bump a MAJOR.MINOR.PATCH version string.
///
/// Increments the selected component (patch by default) and resets the
/// lower-order components to zero. An optional `v` prefix is allowed and
/// kept in the output.
#[derive(Parser, Debug)]
#[command(name = "vbump")]
#[command(version)]
#[command(group(ArgGroup::new("target").args(["major", "minor", "patch"])))]
struct Cli {
    /// Version string to bump, e.g. 1.2.3 or v1.2
    #[arg(value_name = "VERSION")]
    input: String,

    /// Increment major number.
    #[arg(long)]
    major: bool,

    /// Increment minor number.
    #[arg(long)]
    minor: bool,

    /// Increment patch number (default).
    #[arg(long)]
    patch: bool,

    /// Log parsing details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn target(&self) -> BumpTarget {
        if self.major {
            BumpTarget::Major
        } else if self.minor {
            BumpTarget::Minor
        } else {
            BumpTarget::Patch
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let bumped = bump(&cli.input, cli.target())?;

    // No trailing newline so the output can be redirected straight into a file.
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(bumped.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write bumped version to stdout")?;

    Ok(())
}

/// Logs go to stderr; stdout carries only the bumped version.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
