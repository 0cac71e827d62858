//! Prefix length arithmetic on network masks
//!
//! Masks are counted permissively: only the leading run of set bits is
//! measured, and any set bits after the first zero are ignored.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::family::{to_bits, Family};

/// Counts the leading set bits of an `IpAddr` network mask
#[must_use]
pub fn mask_bits(mask: IpAddr) -> u8 {
    match mask {
        IpAddr::V4(mask) => ipv4_mask_bits(mask),
        IpAddr::V6(mask) => ipv6_mask_bits(mask),
    }
}

/// Counts the leading set bits of an `Ipv4Addr` network mask
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn ipv4_mask_bits(mask: Ipv4Addr) -> u8 {
    u32::from(mask).leading_ones() as u8
}

/// Counts the leading set bits of an `Ipv6Addr` network mask
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn ipv6_mask_bits(mask: Ipv6Addr) -> u8 {
    u128::from(mask).leading_ones() as u8
}

/// Checks that a mask is a single run of set bits followed only by zeros
#[must_use]
pub fn is_contiguous(mask: IpAddr) -> bool {
    let family = Family::of(&mask);
    let bits = to_bits(mask);
    bits & host_bits(family, mask_bits(mask)) == 0
}

/// Word with every bit past the first `prefix_len` bits of the family set
pub(crate) fn host_bits(family: Family, prefix_len: u8) -> u128 {
    family
        .all_ones()
        .checked_shr(u32::from(prefix_len))
        .unwrap_or(0)
}
