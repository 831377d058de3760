//! JSON output formatting.

use super::CidrSummary;
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct AddressReport<'a> {
    count: usize,
    addresses: &'a [String],
}

/// Print an address list as a JSON object with a count.
pub fn print_addresses(addresses: &[String]) -> io::Result<()> {
    let report = AddressReport {
        count: addresses.len(),
        addresses,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

/// Print per-block summaries as a JSON array.
pub fn print_summaries(summaries: &[CidrSummary]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summaries)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
