//! The CIDR expander: cap-guarded enumeration of block members.
//!
//! [`Expander`] is a pure function from text to an address list (or the
//! first error). It holds the single tunable, the per-CIDR address cap, and
//! is trivially shareable across threads since nothing else is retained.

use crate::error::{ExpandError, ExpandResult};
use crate::types::Cidr;
use tracing::debug;

/// Expands CIDR literals into their member addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expander {
    max_addresses: u64,
}

impl Expander {
    /// Default per-CIDR address cap (a /16 worth of addresses).
    pub const DEFAULT_MAX_ADDRESSES: u64 = 65_536;

    /// Create an expander with the given per-CIDR cap.
    pub const fn new(max_addresses: u64) -> Self {
        Self { max_addresses }
    }

    /// The configured per-CIDR cap.
    pub const fn max_addresses(&self) -> u64 {
        self.max_addresses
    }

    /// Expand a single CIDR literal into its member addresses, ascending.
    ///
    /// The cap is checked before any enumeration happens, so a `/0` request
    /// fails fast instead of attempting to materialize 2^32 strings.
    pub fn expand(&self, literal: &str) -> ExpandResult<Vec<String>> {
        let cidr: Cidr = literal.parse()?;
        let size = cidr.size();
        debug!(%cidr, size, "expanding block");

        if size > self.max_addresses {
            return Err(ExpandError::CidrTooLarge {
                cidr: literal.to_string(),
                size,
                max: self.max_addresses,
            });
        }

        Ok(cidr.addresses().map(|addr| addr.to_string()).collect())
    }

    /// Expand a whole text block, one CIDR per non-blank line.
    ///
    /// Lines are split on LF or CRLF and trimmed; blank lines are dropped.
    /// Results are concatenated in input order. The first failing line
    /// aborts the batch and discards everything; there is no
    /// partial-success mode. The cap applies to each CIDR independently,
    /// not to the batch total.
    pub fn expand_many(&self, text: &str) -> ExpandResult<Vec<String>> {
        let mut addresses = Vec::new();
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            addresses.extend(self.expand(line)?);
        }
        Ok(addresses)
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ADDRESSES)
    }
}
