//! First, last and broadcast addresses of a network

use std::net::{IpAddr, Ipv4Addr};

use ipnet::{IpAdd, IpSub};

use crate::family::Family;
use crate::mask::{host_bits, mask_bits};
use crate::request::NormalizedInput;

/// Networks this long or longer have no network or broadcast address to skip
const POINT_TO_POINT_PREFIX_LEN: u8 = 31;

/// Boundaries of a network's address range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    /// First address handed out to hosts
    pub first: IpAddr,
    /// Last address handed out to hosts
    pub last: IpAddr,
    /// The all-host-bits-set address, if the network is IPv4
    pub broadcast: Option<Ipv4Addr>,
}

/// Adds one to an address, saturating at the top of the address space
#[must_use]
pub fn increment(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V4(addr) => IpAddr::V4(addr.saturating_add(1u32)),
        IpAddr::V6(addr) => IpAddr::V6(addr.saturating_add(1u128)),
    }
}

/// Subtracts one from an address, saturating at the bottom of the address space
#[must_use]
pub fn decrement(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V4(addr) => IpAddr::V4(addr.saturating_sub(1u32)),
        IpAddr::V6(addr) => IpAddr::V6(addr.saturating_sub(1u128)),
    }
}

/// Computes the range of a normalized network.
///
/// IPv4 networks shorter than a /31 exclude their network and broadcast
/// addresses from the range.
pub(crate) fn address_range(input: &NormalizedInput) -> AddressRange {
    let family = input.family();
    let prefix_len = mask_bits(input.mask());
    let base = input.network_word();

    let mut first = family.addr(base);
    let mut last = family.addr(base | host_bits(family, prefix_len));
    if family == Family::V4 && prefix_len < POINT_TO_POINT_PREFIX_LEN {
        first = increment(first);
        last = decrement(last);
    }

    // Broadcast sets every bit the mask leaves clear, even past a non-contiguous run
    let broadcast = match family.addr(base | (!input.mask_word() & family.all_ones())) {
        IpAddr::V4(broadcast) => Some(broadcast),
        IpAddr::V6(broadcast) => match input.network() {
            IpAddr::V6(network) if network.to_ipv4_mapped().is_some() => {
                broadcast.to_ipv4_mapped()
            }
            _ => None,
        },
    };

    AddressRange {
        first,
        last,
        broadcast,
    }
}
