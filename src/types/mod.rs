//! Core type definitions.
//!
//! Parsed types keep invalid CIDR literals out of the range math: once a
//! value of these types exists, its invariants hold.

mod cidr;

pub use cidr::{Cidr, PREFIX_MASKS};
