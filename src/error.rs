//! Error types for cidrex.
//!
//! Uses `thiserror` for ergonomic error definitions. Every failure here is
//! an expected, reportable outcome of bad input; nothing panics.

use thiserror::Error;

/// Errors produced while expanding CIDR blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The literal does not match the `A.B.C.D/P` grammar.
    #[error("Invalid CIDR: \"{0}\"")]
    InvalidCidrFormat(String),

    /// The literal is well-formed but its range exceeds the configured cap.
    #[error("CIDR {cidr} expands to {size} IPs. Max allowed: {max}.")]
    CidrTooLarge {
        /// The literal as given.
        cidr: String,
        /// Number of addresses the block holds.
        size: u64,
        /// The configured maximum.
        max: u64,
    },
}

/// Result type alias for expansion operations.
pub type ExpandResult<T> = Result<T, ExpandError>;

/// Errors surfaced by the command-line layer.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
