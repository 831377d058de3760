//! # cidrex - IPv4 CIDR Block Expander
//!
//! cidrex turns CIDR notation into explicit address lists: feed it
//! `192.168.1.0/24` and get back all 256 member addresses in order.
//!
//! ## Features
//!
//! - **Batch Input**: expand many blocks at once, one literal per line
//! - **Safety Cap**: a configurable per-block limit (default 65,536)
//!   rejects runaway expansions like `/0` before any work happens
//! - **Strict Parsing**: octets and prefix are validated up front, with
//!   errors that name the offending literal
//! - **Multiple Output Formats**: plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust
//! use cidrex::Expander;
//!
//! let expander = Expander::default();
//! let addresses = expander.expand("10.0.0.0/30").unwrap();
//! assert_eq!(addresses, vec!["10.0.0.0", "10.0.0.1", "10.0.0.2", "10.0.0.3"]);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - The parsed [`Cidr`] type and the prefix-mask table
//! - [`expand`] - The cap-guarded [`Expander`]
//! - [`cli`] - clap-derive subcommand definitions
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod error;
pub mod expand;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, CliResult, ExpandError, ExpandResult};
pub use expand::Expander;
pub use types::{Cidr, PREFIX_MASKS};
