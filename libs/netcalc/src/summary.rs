//! The derived description of a network

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use crate::family::{unmap, Family};
use crate::hostnum::host_number;
use crate::mask::{ipv4_mask_bits, mask_bits};
use crate::range::address_range;
use crate::request::NormalizedInput;

/// An address followed by a prefix length, such as `10.0.0.1/8`.
///
/// Unlike `ipnet::IpNet` the length is not bounded by the address width: an
/// IPv4-mapped request keeps its 128-bit mask length next to the IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cidr {
    pub addr: IpAddr,
    pub prefix_len: u8,
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

/// Every property derived from a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkSummary {
    /// The requested address, host bits included
    pub ip: IpAddr,
    /// The network mask at its own width
    pub mask: IpAddr,
    /// Number of leading set bits in `mask`
    pub mask_bits: u8,
    /// The network the address belongs to
    pub network: Cidr,
    /// First usable address
    pub first_ip: IpAddr,
    /// Last usable address
    pub last_ip: IpAddr,
    /// IPv4 broadcast address
    pub broadcast: Option<Ipv4Addr>,
    /// Value of the address's host bits
    pub hostnum: u128,
}

impl NetworkSummary {
    /// Derive every output field from a normalized address and mask
    #[must_use]
    pub fn derive(input: &NormalizedInput) -> Self {
        let mask_bits = mask_bits(input.mask());
        let range = address_range(input);

        Self {
            ip: unmap(input.ip()),
            mask: input.mask(),
            mask_bits,
            network: network_of(input, mask_bits),
            first_ip: unmap(range.first),
            last_ip: unmap(range.last),
            broadcast: range.broadcast,
            hostnum: host_number(input.ip(), input.mask()),
        }
    }

    /// The requested address with the mask length, such as `10.0.0.1/8`
    #[must_use]
    pub fn prefix(&self) -> Cidr {
        Cidr {
            addr: self.ip,
            prefix_len: self.mask_bits,
        }
    }
}

/// Builds the network, narrowing an IPv4-mapped base to IPv4 with the trailing mask bits
#[allow(clippy::cast_possible_truncation)]
fn network_of(input: &NormalizedInput, mask_bits: u8) -> Cidr {
    let base = input.network();
    match (input.family(), unmap(base)) {
        (Family::V6, IpAddr::V4(base)) => Cidr {
            addr: IpAddr::V4(base),
            prefix_len: ipv4_mask_bits(Ipv4Addr::from(input.mask_word() as u32)),
        },
        _ => Cidr {
            addr: base,
            prefix_len: mask_bits,
        },
    }
}

impl fmt::Display for NetworkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.network, self.prefix())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NetworkSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut record = serializer.serialize_struct("NetworkSummary", 9)?;
        record.serialize_field("prefix", &self.prefix().to_string())?;
        record.serialize_field("ip", &self.ip.to_string())?;
        record.serialize_field("mask", &self.mask.to_string())?;
        record.serialize_field("mask_bits", &self.mask_bits)?;
        record.serialize_field("network", &self.network.to_string())?;
        record.serialize_field("first_ip", &self.first_ip.to_string())?;
        record.serialize_field("last_ip", &self.last_ip.to_string())?;
        record.serialize_field(
            "broadcast",
            &self.broadcast.map(|b| b.to_string()).unwrap_or_default(),
        )?;
        record.serialize_field("hostnum", &self.hostnum.to_string())?;
        record.end()
    }
}
