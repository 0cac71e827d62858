//! Request shapes accepted by the resolver and their normalization into an
//! address and mask of one family

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use ipnet::IpNet;

use crate::error::{Error, Field, MissingInput, Result};
use crate::family::{to_bits, unmap, Family};

/// The raw, optional request fields as they arrive from a caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct RequestFields {
    /// Address and mask length in CIDR notation
    #[cfg_attr(feature = "serde", serde(default))]
    pub prefix: Option<String>,
    /// A single address, paired with `mask`
    #[cfg_attr(feature = "serde", serde(default))]
    pub ip: Option<String>,
    /// A network mask written as an address, paired with `ip`
    #[cfg_attr(feature = "serde", serde(default))]
    pub mask: Option<String>,
}

/// A CIDR prefix such as `10.0.0.1/8`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixInput {
    pub prefix: String,
}

/// An address and a mask written as an address, such as `10.0.0.1` + `255.0.0.0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressMaskInput {
    pub ip: String,
    pub mask: String,
}

/// One of the two accepted request shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRequest {
    Prefix(PrefixInput),
    AddressMask(AddressMaskInput),
}

impl NetworkRequest {
    /// Construct a prefix request
    #[must_use]
    pub fn prefix<S: Into<String>>(prefix: S) -> Self {
        Self::Prefix(PrefixInput {
            prefix: prefix.into(),
        })
    }

    /// Construct an address + mask request
    #[must_use]
    pub fn address_mask<I: Into<String>, M: Into<String>>(ip: I, mask: M) -> Self {
        Self::AddressMask(AddressMaskInput {
            ip: ip.into(),
            mask: mask.into(),
        })
    }

    /// Picks the request shape out of a set of optional fields.
    ///
    /// Exactly one of `prefix` and `ip` must be present, and `mask` must be
    /// present if and only if `ip` is.
    pub fn from_fields(
        prefix: Option<String>,
        ip: Option<String>,
        mask: Option<String>,
    ) -> Result<Self> {
        match (prefix, ip, mask) {
            (Some(_), Some(_), _) => Err(MissingInput::ConflictingInput.into()),
            (None, None, _) => Err(MissingInput::NoInput.into()),
            (Some(prefix), None, None) => Ok(Self::prefix(prefix)),
            (None, Some(ip), Some(mask)) => Ok(Self::address_mask(ip, mask)),
            (Some(_), None, Some(_)) | (None, Some(_), None) => {
                Err(MissingInput::PartialPair.into())
            }
        }
    }

    /// Parse the request literals into an address and mask of the same family
    pub fn normalize(&self) -> Result<NormalizedInput> {
        match self {
            Self::Prefix(input) => input.normalize(),
            Self::AddressMask(input) => input.normalize(),
        }
    }
}

impl fmt::Display for NetworkRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(input) => write!(f, "prefix {}", input.prefix),
            Self::AddressMask(input) => write!(f, "ip {} mask {}", input.ip, input.mask),
        }
    }
}

impl TryFrom<RequestFields> for NetworkRequest {
    type Error = Error;

    fn try_from(fields: RequestFields) -> Result<Self> {
        Self::from_fields(fields.prefix, fields.ip, fields.mask)
    }
}

impl PrefixInput {
    fn normalize(&self) -> Result<NormalizedInput> {
        let net = IpNet::from_str(&self.prefix)
            .map_err(|err| Error::parse(Field::Prefix, &self.prefix, err))?;

        // The address keeps any host bits written in the literal
        Ok(NormalizedInput {
            ip: net.addr(),
            mask: net.netmask(),
        })
    }
}

impl AddressMaskInput {
    fn normalize(&self) -> Result<NormalizedInput> {
        let ip = IpAddr::from_str(&self.ip).map_err(|err| Error::parse(Field::Ip, &self.ip, err))?;

        // A mask written as an IPv4-mapped address spells an IPv4 mask
        let mask = IpAddr::from_str(&self.mask)
            .map(unmap)
            .map_err(|err| Error::parse(Field::Mask, &self.mask, err))?;

        let ip = match (ip, mask) {
            (IpAddr::V4(_), IpAddr::V4(_)) | (IpAddr::V6(_), IpAddr::V6(_)) => ip,
            (IpAddr::V4(v4), IpAddr::V6(_)) => IpAddr::V6(v4.to_ipv6_mapped()),
            (IpAddr::V6(v6), IpAddr::V4(_)) => match v6.to_ipv4_mapped() {
                Some(v4) => IpAddr::V4(v4),
                None => {
                    return Err(Error::MaskFamilyMismatch {
                        ip: self.ip.clone(),
                        mask: self.mask.clone(),
                    })
                }
            },
        };

        Ok(NormalizedInput { ip, mask })
    }
}

/// An address and a mask of the same family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInput {
    ip: IpAddr,
    mask: IpAddr,
}

impl NormalizedInput {
    /// The address, host bits included
    #[must_use]
    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    /// The network mask
    #[must_use]
    pub fn mask(&self) -> IpAddr {
        self.mask
    }

    /// Family shared by the address and mask
    #[must_use]
    pub fn family(&self) -> Family {
        Family::of(&self.mask)
    }

    /// The network base address (`ip AND mask`)
    #[must_use]
    pub fn network(&self) -> IpAddr {
        self.family().addr(self.network_word())
    }

    pub(crate) fn ip_word(&self) -> u128 {
        to_bits(self.ip)
    }

    pub(crate) fn mask_word(&self) -> u128 {
        to_bits(self.mask)
    }

    pub(crate) fn network_word(&self) -> u128 {
        self.ip_word() & self.mask_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(prefix: Option<&str>, ip: Option<&str>, mask: Option<&str>) -> Result<NetworkRequest> {
        NetworkRequest::from_fields(
            prefix.map(str::to_owned),
            ip.map(str::to_owned),
            mask.map(str::to_owned),
        )
    }

    #[test]
    fn test_from_fields_shapes() {
        assert_eq!(
            fields(Some("10.0.0.1/8"), None, None).unwrap(),
            NetworkRequest::prefix("10.0.0.1/8")
        );
        assert_eq!(
            fields(None, Some("10.0.0.1"), Some("255.0.0.0")).unwrap(),
            NetworkRequest::address_mask("10.0.0.1", "255.0.0.0")
        );
    }

    #[test]
    fn test_from_fields_missing_input() {
        assert_eq!(
            fields(None, None, None).unwrap_err(),
            Error::MissingInput(MissingInput::NoInput)
        );
        // A lone mask names neither input shape
        assert_eq!(
            fields(None, None, Some("255.255.255.0")).unwrap_err(),
            Error::MissingInput(MissingInput::NoInput)
        );
        assert_eq!(
            fields(Some("10.0.0.1/8"), Some("10.0.0.1"), None).unwrap_err(),
            Error::MissingInput(MissingInput::ConflictingInput)
        );
        assert_eq!(
            fields(None, Some("192.168.2.56"), None).unwrap_err(),
            Error::MissingInput(MissingInput::PartialPair)
        );
        assert_eq!(
            fields(Some("10.0.0.1/8"), None, Some("255.0.0.0")).unwrap_err(),
            Error::MissingInput(MissingInput::PartialPair)
        );
    }

    #[test]
    fn test_prefix_keeps_host_bits() {
        let input = NetworkRequest::prefix("192.168.0.1/24").normalize().unwrap();
        assert_eq!(input.ip(), "192.168.0.1".parse::<IpAddr>().unwrap());
        assert_eq!(input.mask(), "255.255.255.0".parse::<IpAddr>().unwrap());
        assert_eq!(input.network(), "192.168.0.0".parse::<IpAddr>().unwrap());
        assert_eq!(input.family(), Family::V4);
    }

    #[test]
    fn test_invalid_prefixes() {
        for prefix in [
            "192.168.0.1",
            "192.168.0.1/33",
            "192.168.0.1/24/1",
            "192.168.0/24",
            "fe80::/129",
            "fe80::1%eth0/64",
            " 10.0.0.0/8",
        ] {
            match NetworkRequest::prefix(prefix).normalize() {
                Err(Error::Parse { field, value, .. }) => {
                    assert_eq!(field, Field::Prefix);
                    assert_eq!(value, prefix);
                }
                other => panic!("{prefix} should not parse, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_address_and_mask() {
        assert!(matches!(
            NetworkRequest::address_mask("192.168.0.256", "255.0.0.0").normalize(),
            Err(Error::Parse { field: Field::Ip, .. })
        ));
        assert!(matches!(
            NetworkRequest::address_mask("192.168.0.1", "255.0.0").normalize(),
            Err(Error::Parse { field: Field::Mask, .. })
        ));
    }

    #[test]
    fn test_mapped_mask_literal_is_ipv4() {
        let input = NetworkRequest::address_mask("10.1.2.3", "::ffff:255.255.0.0")
            .normalize()
            .unwrap();
        assert_eq!(input.family(), Family::V4);
        assert_eq!(input.mask(), "255.255.0.0".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_compatible_mask_literal_stays_ipv6() {
        let input = NetworkRequest::address_mask("::1", "::255.255.0.0")
            .normalize()
            .unwrap();
        assert_eq!(input.family(), Family::V6);
    }

    #[test]
    fn test_mapped_address_narrows_to_ipv4_mask() {
        let input = NetworkRequest::address_mask("::ffff:10.1.2.3", "255.255.0.0")
            .normalize()
            .unwrap();
        assert_eq!(input.ip(), "10.1.2.3".parse::<IpAddr>().unwrap());
        assert_eq!(input.network(), "10.1.0.0".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_ipv4_address_widens_to_ipv6_mask() {
        let input = NetworkRequest::address_mask("10.1.2.3", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:0")
            .normalize()
            .unwrap();
        assert_eq!(input.family(), Family::V6);
        assert_eq!(input.ip(), "::ffff:10.1.2.3".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_ipv6_address_with_ipv4_mask() {
        assert_eq!(
            NetworkRequest::address_mask("2001:db8::1", "255.255.255.0")
                .normalize()
                .unwrap_err(),
            Error::MaskFamilyMismatch {
                ip: "2001:db8::1".to_owned(),
                mask: "255.255.255.0".to_owned(),
            }
        );
    }
}
