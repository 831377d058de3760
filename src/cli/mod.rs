//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `cidrex expand <cidrs>` - expand blocks into explicit address lists
//! - `cidrex info <cidrs>` - summarize blocks without enumerating

mod expand;
mod info;

pub use expand::ExpandCommand;
pub use info::InfoCommand;

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// cidrex - Expand IPv4 CIDR blocks into explicit address lists.
///
/// Blocks can be given as arguments, read from a file, or piped on stdin,
/// one literal per line. Expansion is capped per block so a stray `/0`
/// cannot flood the output.
#[derive(Parser, Debug)]
#[command(name = "cidrex")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Expand IPv4 CIDR blocks into address lists", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand CIDR blocks into their member addresses
    #[command(alias = "x")]
    Expand(ExpandCommand),

    /// Show network, broadcast, netmask, and size per block
    #[command(alias = "i")]
    Info(InfoCommand),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line, pipeline friendly
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Gather the input text: positional literals, a file, or stdin.
///
/// Positional arguments are joined with newlines so downstream code sees a
/// single multi-line text regardless of how the blocks arrived.
pub(crate) fn read_input(cidrs: &[String], file: Option<&Path>) -> io::Result<String> {
    if !cidrs.is_empty() {
        return Ok(cidrs.join("\n"));
    }
    if let Some(path) = file {
        return fs::read_to_string(path);
    }
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_joins_args() {
        let cidrs = vec!["10.0.0.0/24".to_string(), "192.168.0.0/24".to_string()];
        let text = read_input(&cidrs, None).unwrap();
        assert_eq!(text, "10.0.0.0/24\n192.168.0.0/24");
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input(&[], Some(Path::new("/nonexistent/cidrs.txt"))).is_err());
    }
}
