//! cidrex binary entry point.
//!
//! Parses the CLI, wires up tracing, dispatches to the subcommand handler,
//! and maps failures to a styled stderr line and exit code 1.

use clap::Parser;
use cidrex::cli::{Cli, Commands};
use cidrex::output;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Expand(cmd) => cmd.execute(cli.quiet),
        Commands::Info(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` maps to debug and
/// `--quiet` to error.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
