//! CSV output formatting.

use super::CidrSummary;
use std::io;

/// Print an address list as single-column CSV.
pub fn print_addresses(addresses: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    wtr.write_record(["address"])?;
    for address in addresses {
        wtr.write_record([address.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print per-block summaries as CSV rows.
pub fn print_summaries(summaries: &[CidrSummary]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    wtr.write_record(["cidr", "network", "broadcast", "netmask", "prefix", "size"])?;
    for summary in summaries {
        wtr.write_record([
            summary.cidr.as_str(),
            summary.network.as_str(),
            summary.broadcast.as_str(),
            summary.netmask.as_str(),
            &summary.prefix.to_string(),
            &summary.size.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
