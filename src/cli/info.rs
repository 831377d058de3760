//! Info subcommand implementation.
//!
//! Handles `cidrex info <cidrs>`: per-block summaries without enumerating,
//! so it works on blocks far larger than the expansion cap.

use crate::cli::{read_input, OutputFormat};
use crate::error::CliResult;
use crate::output::{self, CidrSummary};
use crate::types::Cidr;
use clap::Parser;
use std::path::PathBuf;

/// Show network, broadcast, netmask, and size per block.
#[derive(Parser, Debug)]
pub struct InfoCommand {
    /// CIDR blocks to summarize
    ///
    /// When omitted, blocks are read from --file or stdin, one per line.
    #[arg(value_name = "CIDR", conflicts_with = "file")]
    pub cidrs: Vec<String>,

    /// Read CIDR blocks from a file, one per line
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,
}

impl InfoCommand {
    /// Execute the info command.
    pub fn execute(&self) -> CliResult<()> {
        let text = read_input(&self.cidrs, self.file.as_deref())?;

        let mut summaries = Vec::new();
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let cidr: Cidr = line.parse()?;
            summaries.push(CidrSummary::new(line, &cidr));
        }

        output::print_summaries(&summaries, self.output)?;
        Ok(())
    }
}
