use std::net::IpAddr;

use crate::family::{to_bits, Family};

/// Computes the host number of an address: the value of the bits its mask leaves clear.
///
/// An IPv6 address paired with an IPv4 mask is reduced to its trailing 32 bits first.
#[must_use]
pub fn host_number(ip: IpAddr, mask: IpAddr) -> u128 {
    let family = Family::of(&mask);
    let ip = to_bits(ip) & family.all_ones();
    ip & !to_bits(mask) & family.all_ones()
}
