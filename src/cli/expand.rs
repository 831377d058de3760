//! Expand subcommand implementation.
//!
//! Handles the `cidrex expand <cidrs>` command.

use crate::cli::{read_input, OutputFormat};
use crate::error::CliResult;
use crate::expand::Expander;
use crate::output;
use clap::Parser;
use std::path::PathBuf;

/// Expand CIDR blocks into their member addresses.
#[derive(Parser, Debug)]
pub struct ExpandCommand {
    /// CIDR blocks to expand
    ///
    /// Examples:
    ///   192.168.1.0/24     256 addresses
    ///   10.0.0.1/32        the address itself
    ///
    /// When omitted, blocks are read from --file or stdin, one per line.
    #[arg(value_name = "CIDR", conflicts_with = "file")]
    pub cidrs: Vec<String>,

    /// Read CIDR blocks from a file, one per line
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Maximum addresses a single CIDR may expand to
    #[arg(
        long = "max",
        value_name = "N",
        env = "CIDREX_MAX_ADDRESSES",
        default_value_t = Expander::DEFAULT_MAX_ADDRESSES
    )]
    pub max_addresses: u64,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,
}

impl ExpandCommand {
    /// Execute the expand command.
    pub fn execute(&self, quiet: bool) -> CliResult<()> {
        let text = read_input(&self.cidrs, self.file.as_deref())?;

        let expander = Expander::new(self.max_addresses);
        let addresses = expander.expand_many(&text)?;

        output::print_addresses(&addresses, self.output, quiet)?;
        Ok(())
    }
}
