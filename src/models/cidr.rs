//! CIDR notation: parsing, canonical-form validation and containment tests.
//!
//! Provides [`Cidr`] for IPv4 and IPv6 blocks. Address arithmetic runs on a
//! `u128` view of the address so both families share the same mask code.

use crate::error::{IpamError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length for an IPv4 block.
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 block.
pub const MAX_LENGTH_V6: u8 = 128;

/// Maximum prefix length for the family of `addr`.
pub fn max_length(addr: IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => MAX_LENGTH_V4,
        IpAddr::V6(_) => MAX_LENGTH_V6,
    }
}

fn addr_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    }
}

fn addr_from_bits(bits: u128, family: IpAddr) -> IpAddr {
    match family {
        IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::from(bits as u32)),
        IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::from(bits)),
    }
}

/// Convert a prefix length to a network mask inside a `max`-bit address.
///
/// # Examples
/// ```
/// use simple_ipam::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24, 32).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8, max: u8) -> Result<u128> {
    if len > max {
        return Err(IpamError::invalid_cidr(
            &format!("/{len}"),
            format!("prefix length is longer than {max} bits"),
        ));
    }
    let right_len = (max - len) as u32;
    let all_bits = u128::MAX.checked_shr(128 - max as u32).unwrap_or(0);
    let mask = all_bits
        .checked_shr(right_len)
        .unwrap_or(0)
        .checked_shl(right_len)
        .unwrap_or(0);
    Ok(mask)
}

/// Get the network address for `addr` under a prefix of `len` bits.
pub fn cut_addr(addr: IpAddr, len: u8) -> Result<IpAddr> {
    let mask = get_cidr_mask(len, max_length(addr))?;
    Ok(addr_from_bits(addr_bits(addr) & mask, addr))
}

/// Get the last address of the block `addr/len`.
pub fn broadcast_addr(addr: IpAddr, len: u8) -> Result<IpAddr> {
    let max = max_length(addr);
    let mask = get_cidr_mask(len, max)?;
    let host_bits = !mask & get_cidr_mask(max, max)?;
    Ok(addr_from_bits((addr_bits(addr) & mask) | host_bits, addr))
}

/// An address block in CIDR notation.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as written; only canonical blocks have all host bits clear.
    pub addr: IpAddr,
    /// The prefix length.
    pub mask: u8,
}

impl Cidr {
    /// Parse `addr/len` without requiring canonical form (host bits may be set).
    pub fn new(addr_cidr: &str) -> Result<Cidr> {
        let (addr, mask) = addr_cidr
            .trim()
            .split_once('/')
            .ok_or_else(|| IpamError::invalid_cidr(addr_cidr, "expected address/prefix-length"))?;
        let addr = IpAddr::from_str(addr)
            .map_err(|_| IpamError::invalid_cidr(addr_cidr, format!("invalid address {addr}")))?;
        let mask = u8::from_str(mask)
            .map_err(|_| IpamError::invalid_cidr(addr_cidr, format!("invalid prefix length {mask}")))?;
        let max = max_length(addr);
        if mask > max {
            return Err(IpamError::invalid_cidr(
                addr_cidr,
                format!("prefix length {mask} is longer than {max} bits"),
            ));
        }
        Ok(Cidr { addr, mask })
    }

    /// Lowest (network) address of the block.
    pub fn lo(&self) -> IpAddr {
        // mask is bounded by Cidr::new, so the fallback is never taken
        cut_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Highest address of the block.
    pub fn hi(&self) -> IpAddr {
        broadcast_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// True when all host bits are clear.
    pub fn is_canonical(&self) -> bool {
        self.lo() == self.addr
    }

    /// True when `ip` falls inside this block. Always false across families.
    pub fn contains_addr(&self, ip: IpAddr) -> bool {
        if self.addr.is_ipv4() != ip.is_ipv4() {
            return false;
        }
        self.lo() <= ip && ip <= self.hi()
    }

    /// True when every address of `other` lies inside this block.
    pub fn contains(&self, other: &Cidr) -> bool {
        other.mask >= self.mask && self.contains_addr(other.lo())
    }
}

/// Validate that `candidate` is a CIDR written in canonical network/prefix form.
///
/// `10.0.0.0/24` is accepted, `10.0.0.1/24` is rejected.
pub fn validate(candidate: &str) -> Result<Cidr> {
    let cidr = Cidr::new(candidate)?;
    if !cidr.is_canonical() {
        return Err(IpamError::invalid_cidr(
            candidate,
            format!("host bits are set, the network is {}/{}", cidr.lo(), cidr.mask),
        ));
    }
    if cidr.to_string() != candidate {
        return Err(IpamError::invalid_cidr(
            candidate,
            format!("not valid CIDR notation, expected {cidr}"),
        ));
    }
    Ok(cidr)
}

/// True when `candidate_child` lies inside `candidate_parent` with an equal or longer prefix.
///
/// Identical blocks also satisfy this; callers treat that case as a duplicate.
pub fn is_subnet_of(candidate_parent: &Cidr, candidate_child: &Cidr) -> bool {
    candidate_parent.contains(candidate_child)
}

/// True when `candidate_supernet` covers `existing` with an equal or shorter prefix.
pub fn is_supernet_of(candidate_supernet: &Cidr, existing: &Cidr) -> bool {
    candidate_supernet.contains(existing)
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        validate(&s).map_err(de::Error::custom)
    }
}

impl FromStr for Cidr {
    type Err = IpamError;

    fn from_str(s: &str) -> Result<Cidr> {
        validate(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

// Siblings sort by family, then prefix length, then address.
impl Ord for Cidr {
    fn cmp(&self, other: &Cidr) -> Ordering {
        (self.addr.is_ipv6(), self.mask, self.addr).cmp(&(other.addr.is_ipv6(), other.mask, other.addr))
    }
}

impl PartialOrd for Cidr {
    fn partial_cmp(&self, other: &Cidr) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cidr(s: &str) -> Cidr {
        Cidr::new(s).unwrap()
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0, 32).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8, 32).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16, 32).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24, 32).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32, 32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33, 32).is_err());
        assert_eq!(get_cidr_mask(0, 128).unwrap(), 0);
        assert_eq!(get_cidr_mask(128, 128).unwrap(), u128::MAX);
        assert_eq!(get_cidr_mask(64, 128).unwrap(), u128::MAX << 64);
    }

    #[test]
    fn test_cut_addr() {
        let ip: IpAddr = "192.168.1.42".parse().unwrap();
        assert_eq!(cut_addr(ip, 24).unwrap().to_string(), "192.168.1.0");
        assert_eq!(cut_addr(ip, 16).unwrap().to_string(), "192.168.0.0");
        assert_eq!(cut_addr(ip, 32).unwrap(), ip);
        assert!(cut_addr(ip, 33).is_err());
        let ip6: IpAddr = "2001:db8::1".parse().unwrap();
        assert_eq!(cut_addr(ip6, 32).unwrap().to_string(), "2001:db8::");
    }

    #[test]
    fn test_broadcast_addr() {
        let ip: IpAddr = "192.168.1.0".parse().unwrap();
        assert_eq!(broadcast_addr(ip, 24).unwrap().to_string(), "192.168.1.255");
        assert_eq!(broadcast_addr(ip, 8).unwrap().to_string(), "192.255.255.255");
        assert_eq!(broadcast_addr(ip, 32).unwrap(), ip);
        let ip6: IpAddr = "2001:db8::".parse().unwrap();
        assert_eq!(
            broadcast_addr(ip6, 112).unwrap().to_string(),
            "2001:db8::ffff"
        );
    }

    #[test]
    fn test_lo_hi() {
        let net = cidr("10.0.10.0/24");
        assert_eq!(net.lo().to_string(), "10.0.10.0");
        assert_eq!(net.hi().to_string(), "10.0.10.255");
        assert_eq!(cidr("0.0.0.0/0").hi().to_string(), "255.255.255.255");
    }

    #[test]
    fn test_validate_canonical() {
        assert_eq!(validate("10.0.0.0/24").unwrap(), cidr("10.0.0.0/24"));
        assert!(validate("0.0.0.0/0").is_ok());
        assert!(validate("2001:db8::/32").is_ok());
        assert!(validate("10.10.0.0/32").is_ok());
    }

    #[test]
    fn test_validate_rejects_host_bits() {
        let err = validate("10.0.0.1/24").unwrap_err();
        assert!(matches!(err, IpamError::InvalidCidr { .. }));
        assert!(err.to_string().contains("10.0.0.0/24"));
        assert!(validate("10.10.0.100/22").is_err());
        assert!(validate("2001:db8::1/32").is_err());
    }

    #[test]
    fn test_validate_rejects_malformed() {
        for bad in [
            "",
            "10.0.0.0",
            "10.0.0.0/",
            "10.0.0.0/33",
            "2001:db8::/129",
            "10.0.0/24",
            "not-an-ip/8",
            "10.0.0.0/24/1",
            " 10.0.0.0/24",
            "10.0.0.0/+24",
            "10.0.0.0/024",
            "2001:DB8::/32",
        ] {
            assert!(
                matches!(validate(bad), Err(IpamError::InvalidCidr { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_is_subnet_of() {
        let parent = cidr("10.10.0.0/20");
        assert!(is_subnet_of(&parent, &cidr("10.10.0.0/24")));
        assert!(is_subnet_of(&parent, &cidr("10.10.15.0/24")));
        assert!(!is_subnet_of(&parent, &cidr("10.10.16.0/24")));
        assert!(!is_subnet_of(&parent, &cidr("10.10.0.0/16")));
        // identical blocks are the caller's duplicate case
        assert!(is_subnet_of(&parent, &parent));
    }

    #[test]
    fn test_is_supernet_of() {
        let existing = cidr("10.10.0.0/24");
        assert!(is_supernet_of(&cidr("10.10.0.0/22"), &existing));
        assert!(is_supernet_of(&cidr("10.0.0.0/8"), &existing));
        assert!(!is_supernet_of(&cidr("10.10.1.0/24"), &existing));
        assert!(!is_supernet_of(&cidr("10.10.0.0/25"), &existing));
    }

    #[test]
    fn test_disjoint_ranges_are_neither() {
        let a = cidr("10.0.0.0/24");
        let b = cidr("192.168.0.0/24");
        assert!(!is_subnet_of(&a, &b));
        assert!(!is_subnet_of(&b, &a));
        assert!(!is_supernet_of(&a, &b));
        assert!(!is_supernet_of(&b, &a));
    }

    #[test]
    fn test_contains_addr_range_edges() {
        let net = cidr("10.10.0.0/22");
        assert!(net.contains_addr("10.10.0.0".parse().unwrap()));
        assert!(net.contains_addr("10.10.3.255".parse().unwrap()));
        assert!(!net.contains_addr("10.10.4.0".parse().unwrap()));
        assert!(!net.contains_addr("10.9.255.255".parse().unwrap()));
        assert!(cidr("::/0").contains_addr("ffff::1".parse().unwrap()));
    }

    #[test]
    fn test_comparators_agree_with_contains() {
        let blocks = ["10.0.0.0/8", "10.10.0.0/20", "10.10.0.0/24", "10.10.16.0/24", "192.168.0.0/16"];
        for a in blocks {
            for b in blocks {
                let (a, b) = (cidr(a), cidr(b));
                assert_eq!(is_subnet_of(&a, &b), a.contains(&b), "{a} {b}");
                assert_eq!(is_supernet_of(&a, &b), a.contains(&b), "{a} {b}");
            }
        }
    }

    #[test]
    fn test_mixed_family_never_contains() {
        let v4 = cidr("0.0.0.0/0");
        let v6 = cidr("::/0");
        assert!(!v4.contains(&cidr("::/96")));
        assert!(!v6.contains(&cidr("10.0.0.0/8")));
        assert!(!is_subnet_of(&v6, &cidr("10.0.0.0/8")));
    }

    #[test]
    fn test_ordering_prefix_then_address() {
        let mut cidrs = vec![
            cidr("2001:db8::/32"),
            cidr("10.10.0.0/24"),
            cidr("10.0.0.0/8"),
            cidr("10.9.0.0/24"),
            cidr("172.16.0.0/12"),
        ];
        cidrs.sort();
        let rendered: Vec<String> = cidrs.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "10.0.0.0/8",
                "172.16.0.0/12",
                "10.9.0.0/24",
                "10.10.0.0/24",
                "2001:db8::/32"
            ]
        );
    }
}
