//! Plain text output formatting.
//!
//! Addresses print one per line to stdout, nmap-pipeline friendly. Status
//! lines use `console` styling on stderr.

use super::CidrSummary;
use console::style;
use std::io::{self, Write};

/// Print addresses one per line to locked stdout.
pub fn print_addresses(addresses: &[String], quiet: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for address in addresses {
        writeln!(out, "{}", address)?;
    }
    out.flush()?;

    if !quiet {
        print_success(&format!(
            "{} address{}",
            addresses.len(),
            if addresses.len() == 1 { "" } else { "es" }
        ));
    }
    Ok(())
}

/// Print per-block summaries as an aligned table.
pub fn print_summaries(summaries: &[CidrSummary]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "{:<20}  {:<15}  {:<15}  {:<15}  {:>12}",
        style("CIDR").bold(),
        style("NETWORK").bold(),
        style("BROADCAST").bold(),
        style("NETMASK").bold(),
        style("ADDRESSES").bold()
    )?;

    for summary in summaries {
        writeln!(
            out,
            "{:<20}  {:<15}  {:<15}  {:<15}  {:>12}",
            summary.cidr, summary.network, summary.broadcast, summary.netmask, summary.size
        )?;
    }

    out.flush()
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a success message to stderr.
pub fn print_success(msg: &str) {
    eprintln!("{} {}", style("✓").green().bold(), msg);
}
