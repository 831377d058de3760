//! Output formatting utilities.
//!
//! Each format renders to stdout; human-facing status and error lines go to
//! stderr so piped output stays clean.

mod csv_format;
mod json_format;
mod plain;

pub use plain::{print_error, print_success};

use crate::cli::OutputFormat;
use crate::types::Cidr;
use serde::Serialize;
use std::io;
use std::net::Ipv4Addr;

/// Per-block summary row for the `info` subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct CidrSummary {
    /// The literal as given on input.
    pub cidr: String,
    /// First address of the block.
    pub network: String,
    /// Last address of the block.
    pub broadcast: String,
    /// Netmask in dotted-decimal form.
    pub netmask: String,
    /// Prefix length.
    pub prefix: u8,
    /// Number of addresses in the block.
    pub size: u64,
}

impl CidrSummary {
    /// Build a summary for a parsed block, keeping the original literal.
    pub fn new(literal: &str, cidr: &Cidr) -> Self {
        Self {
            cidr: literal.to_string(),
            network: Ipv4Addr::from(cidr.network()).to_string(),
            broadcast: Ipv4Addr::from(cidr.broadcast()).to_string(),
            netmask: Ipv4Addr::from(cidr.mask()).to_string(),
            prefix: cidr.prefix(),
            size: cidr.size(),
        }
    }
}

/// Print an expanded address list in the requested format.
pub fn print_addresses(addresses: &[String], format: OutputFormat, quiet: bool) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_addresses(addresses, quiet),
        OutputFormat::Json => json_format::print_addresses(addresses),
        OutputFormat::Csv => csv_format::print_addresses(addresses),
    }
}

/// Print per-block summaries in the requested format.
pub fn print_summaries(summaries: &[CidrSummary], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_summaries(summaries),
        OutputFormat::Json => json_format::print_summaries(summaries),
        OutputFormat::Csv => csv_format::print_summaries(summaries),
    }
}
