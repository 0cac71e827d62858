//! Error types for this library

use std::fmt;

/// The request field a raw literal was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Prefix,
    Ip,
    Mask,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Prefix => "prefix",
            Self::Ip => "ip",
            Self::Mask => "mask",
        })
    }
}

/// Ways a request can fail to name exactly one input shape
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum MissingInput {
    /// Neither `prefix` nor `ip` was supplied
    #[error("exactly one of `ip, prefix` must be specified")]
    NoInput,
    /// Both `prefix` and `ip` were supplied
    #[error("exactly one of `ip, prefix` must be specified, got both")]
    ConflictingInput,
    /// Only one half of the `ip` + `mask` pair was supplied
    #[error("all of `ip, mask` must be specified")]
    PartialPair,
}

/// All possible errors thrown by `netcalc` functions
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error(transparent)]
    MissingInput(#[from] MissingInput),
    #[error("Invalid {field} `{value}`: {reason}")]
    Parse {
        field: Field,
        value: String,
        reason: String,
    },
    #[error("IPv4 mask `{mask}` cannot be applied to IPv6 address `{ip}`")]
    MaskFamilyMismatch { ip: String, mask: String },
}

impl Error {
    pub(crate) fn parse<E: fmt::Display>(field: Field, value: &str, reason: E) -> Self {
        Self::Parse {
            field,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for `netcalc`
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_messages() {
        assert_eq!(
            Error::from(MissingInput::NoInput).to_string(),
            "exactly one of `ip, prefix` must be specified"
        );
        assert_eq!(
            Error::from(MissingInput::PartialPair).to_string(),
            "all of `ip, mask` must be specified"
        );
    }

    #[test]
    fn test_parse_error_names_field_and_value() {
        let error = Error::parse(Field::Mask, "255.255.0", "invalid IP address syntax");
        assert_eq!(
            error.to_string(),
            "Invalid mask `255.255.0`: invalid IP address syntax"
        );
    }
}
