//! CIDR literal parsing and range math.
//!
//! `Cidr` is the validated form of an `A.B.C.D/P` literal. Parsing enforces
//! the literal grammar (four 1-3 digit octets valued 0-255, prefix 0-32);
//! everything after that is plain unsigned 32-bit arithmetic against a
//! precomputed mask table.

use crate::error::ExpandError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Netmasks for every prefix length 0-32, most-significant `p` bits set.
///
/// Computed once at compile time; immutable, so concurrent readers need no
/// synchronization. The table starts filling at `p = 1` because
/// `u32::MAX << 32` overflows the shift width; `p = 0` stays all-zero.
pub const PREFIX_MASKS: [u32; 33] = build_masks();

const fn build_masks() -> [u32; 33] {
    let mut masks = [0u32; 33];
    let mut p = 1;
    while p <= 32 {
        masks[p] = u32::MAX << (32 - p);
        p += 1;
    }
    masks
}

/// A validated IPv4 CIDR block.
///
/// Using a parsed type prevents raw strings from reaching the range math:
/// once a `Cidr` exists, its prefix is known to be in 0-32 and its base
/// address is a genuine `u32` with no sign-extension surprises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cidr {
    /// Base address exactly as written, before masking.
    base: u32,
    /// Prefix length, 0-32.
    prefix: u8,
}

impl Cidr {
    /// Parse a CIDR literal of the form `A.B.C.D/P`.
    ///
    /// Octets must be 1-3 decimal digits valued 0-255 (leading zeros are
    /// accepted); the prefix must be 1-2 decimal digits valued 0-32. Any
    /// other shape fails with [`ExpandError::InvalidCidrFormat`] carrying
    /// the offending literal.
    pub fn parse(s: &str) -> Result<Self, ExpandError> {
        let invalid = || ExpandError::InvalidCidrFormat(s.to_string());

        let (addr_part, prefix_part) = s.split_once('/').ok_or_else(invalid)?;

        if prefix_part.is_empty()
            || prefix_part.len() > 2
            || !prefix_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let prefix: u8 = prefix_part.parse().map_err(|_| invalid())?;
        if prefix > 32 {
            return Err(invalid());
        }

        let octets: Vec<&str> = addr_part.split('.').collect();
        if octets.len() != 4 {
            return Err(invalid());
        }

        let mut base = 0u32;
        for octet in octets {
            if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let value: u32 = octet.parse().map_err(|_| invalid())?;
            if value > 255 {
                return Err(invalid());
            }
            // First octet is the most significant byte.
            base = (base << 8) | value;
        }

        Ok(Self { base, prefix })
    }

    /// The prefix length.
    #[inline]
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The netmask for this block's prefix length.
    #[inline]
    pub const fn mask(&self) -> u32 {
        PREFIX_MASKS[self.prefix as usize]
    }

    /// First address of the block (base AND mask).
    #[inline]
    pub const fn network(&self) -> u32 {
        self.base & self.mask()
    }

    /// Last address of the block (network OR inverted mask).
    #[inline]
    pub const fn broadcast(&self) -> u32 {
        self.network() | !self.mask()
    }

    /// Number of addresses in the block, exactly `2^(32 - prefix)`.
    ///
    /// Returned as `u64`: the `/0` block holds 2^32 addresses, one more
    /// than `u32` can represent.
    #[inline]
    pub const fn size(&self) -> u64 {
        self.broadcast() as u64 - self.network() as u64 + 1
    }

    /// Iterate every address in the block in strictly increasing order.
    pub fn addresses(&self) -> impl Iterator<Item = Ipv4Addr> {
        (self.network()..=self.broadcast()).map(Ipv4Addr::from)
    }
}

impl FromStr for Cidr {
    type Err = ExpandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.base), self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_table() {
        assert_eq!(PREFIX_MASKS[0], 0);
        assert_eq!(PREFIX_MASKS[1], 0x8000_0000);
        assert_eq!(PREFIX_MASKS[8], 0xff00_0000);
        assert_eq!(PREFIX_MASKS[16], 0xffff_0000);
        assert_eq!(PREFIX_MASKS[24], 0xffff_ff00);
        assert_eq!(PREFIX_MASKS[31], 0xffff_fffe);
        assert_eq!(PREFIX_MASKS[32], u32::MAX);
    }

    #[test]
    fn test_parse_valid() {
        let cidr: Cidr = "192.168.1.0/24".parse().unwrap();
        assert_eq!(cidr.prefix(), 24);
        assert_eq!(Ipv4Addr::from(cidr.network()), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(
            Ipv4Addr::from(cidr.broadcast()),
            Ipv4Addr::new(192, 168, 1, 255)
        );
    }

    #[test]
    fn test_parse_masks_host_bits() {
        // Base is masked down to the network address, not rejected.
        let cidr: Cidr = "10.1.2.3/8".parse().unwrap();
        assert_eq!(Ipv4Addr::from(cidr.network()), Ipv4Addr::new(10, 0, 0, 0));
    }

    #[test]
    fn test_parse_leading_zeros_accepted() {
        let cidr: Cidr = "010.000.0.001/32".parse().unwrap();
        assert_eq!(Ipv4Addr::from(cidr.network()), Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert!(matches!(
            Cidr::parse("10.0.0.1"),
            Err(ExpandError::InvalidCidrFormat(_))
        ));
    }

    #[test]
    fn test_parse_prefix_out_of_range() {
        assert!(Cidr::parse("10.0.0.0/33").is_err());
        assert!(Cidr::parse("10.0.0.0/333").is_err());
    }

    #[test]
    fn test_parse_octet_out_of_range() {
        assert!(Cidr::parse("999.1.1.1/24").is_err());
        assert!(Cidr::parse("1.256.1.1/24").is_err());
    }

    #[test]
    fn test_parse_malformed_shapes() {
        assert!(Cidr::parse("").is_err());
        assert!(Cidr::parse("10.0.0/24").is_err());
        assert!(Cidr::parse("10.0.0.0.0/24").is_err());
        assert!(Cidr::parse("10.0.0.0/").is_err());
        assert!(Cidr::parse("10.0.0.0/ 24").is_err());
        assert!(Cidr::parse("a.b.c.d/24").is_err());
        assert!(Cidr::parse("10.0.0.1/-1").is_err());
        assert!(Cidr::parse("1234.0.0.1/24").is_err());
    }

    #[test]
    fn test_size_by_prefix() {
        let size = |s: &str| Cidr::parse(s).unwrap().size();
        assert_eq!(size("0.0.0.0/0"), 1u64 << 32);
        assert_eq!(size("10.0.0.0/8"), 1 << 24);
        assert_eq!(size("10.0.0.0/16"), 65_536);
        assert_eq!(size("10.0.0.0/24"), 256);
        assert_eq!(size("10.0.0.0/31"), 2);
        assert_eq!(size("10.0.0.0/32"), 1);
    }

    #[test]
    fn test_slash_zero_spans_whole_space() {
        let cidr: Cidr = "1.2.3.4/0".parse().unwrap();
        assert_eq!(cidr.network(), 0);
        assert_eq!(cidr.broadcast(), u32::MAX);
    }

    #[test]
    fn test_slash_32_is_identity() {
        let cidr: Cidr = "127.0.0.1/32".parse().unwrap();
        assert_eq!(cidr.network(), cidr.broadcast());
        let addrs: Vec<Ipv4Addr> = cidr.addresses().collect();
        assert_eq!(addrs, vec![Ipv4Addr::new(127, 0, 0, 1)]);
    }

    #[test]
    fn test_addresses_ascending_and_contiguous() {
        let cidr: Cidr = "172.16.0.0/30".parse().unwrap();
        let addrs: Vec<String> = cidr.addresses().map(|a| a.to_string()).collect();
        assert_eq!(addrs, vec!["172.16.0.0", "172.16.0.1", "172.16.0.2", "172.16.0.3"]);
    }

    #[test]
    fn test_roundtrip_boundary_addresses() {
        for s in ["0.0.0.0", "255.255.255.255", "127.0.0.1"] {
            let addr: Ipv4Addr = s.parse().unwrap();
            assert_eq!(Ipv4Addr::from(u32::from(addr)).to_string(), s);
        }
    }

    #[test]
    fn test_display_normalizes() {
        let cidr: Cidr = "192.168.001.005/24".parse().unwrap();
        assert_eq!(cidr.to_string(), "192.168.1.5/24");
    }
}
