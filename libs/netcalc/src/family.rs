use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Address family, decided by the width of an address or mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Get the family of an address
    #[must_use]
    pub const fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }

    /// Number of bits in an address of this family
    #[must_use]
    pub const fn width(self) -> u32 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }

    /// Every bit of this family's width set
    #[must_use]
    pub const fn all_ones(self) -> u128 {
        match self {
            Self::V4 => u32::MAX as u128,
            Self::V6 => u128::MAX,
        }
    }

    /// Builds an address of this family from the low bits of a word
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn addr(self, bits: u128) -> IpAddr {
        match self {
            Self::V4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            Self::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }
}

/// Converts an address into a big-endian word, right-aligned
pub(crate) fn to_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(addr) => u128::from(u32::from(addr)),
        IpAddr::V6(addr) => u128::from(addr),
    }
}

/// Renders IPv4-mapped IPv6 addresses as the IPv4 address they carry
pub(crate) fn unmap(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map_or(addr, IpAddr::V4),
        IpAddr::V4(_) => addr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_conversion() {
        let addr: IpAddr = "192.168.0.1".parse().unwrap();
        assert_eq!(to_bits(addr), 0xc0a8_0001);
        assert_eq!(Family::V4.addr(0xc0a8_0001), addr);

        let addr: IpAddr = "2001:db8::1".parse().unwrap();
        assert_eq!(Family::V6.addr(to_bits(addr)), addr);
    }

    #[test]
    fn test_unmap() {
        assert_eq!(
            unmap("::ffff:10.0.0.1".parse().unwrap()),
            "10.0.0.1".parse::<IpAddr>().unwrap()
        );
        // IPv4-compatible addresses are not mapped addresses
        assert_eq!(
            unmap("::10.0.0.1".parse().unwrap()),
            "::10.0.0.1".parse::<IpAddr>().unwrap()
        );
    }
}
