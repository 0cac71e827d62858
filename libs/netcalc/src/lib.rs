#![doc = include_str!("../README.md")]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
mod family;
mod hostnum;
mod mask;
mod range;
mod request;
mod summary;

pub use error::{Error, Field, MissingInput, Result};
pub use family::Family;
pub use hostnum::host_number;
pub use mask::{ipv4_mask_bits, ipv6_mask_bits, is_contiguous, mask_bits};
pub use range::{decrement, increment, AddressRange};
pub use request::{AddressMaskInput, NetworkRequest, NormalizedInput, PrefixInput, RequestFields};
pub use summary::{Cidr, NetworkSummary};

/// Resolves a request into the full description of its network
#[profiling::function]
pub fn resolve(request: &NetworkRequest) -> Result<NetworkSummary> {
    let input = request.normalize()?;
    log::trace!(
        "Normalized {} to address {} with mask {}",
        request,
        input.ip(),
        input.mask()
    );

    // Only the leading run of a non-contiguous mask counts towards its length
    if !is_contiguous(input.mask()) {
        log::debug!(
            "Mask {} is not contiguous, using its leading {} bits",
            input.mask(),
            mask_bits(input.mask())
        );
    }

    let summary = NetworkSummary::derive(&input);
    log::debug!("Resolved {} to network {}", request, summary.network);
    Ok(summary)
}

/// Resolves a request given as optional raw fields
pub fn resolve_fields(fields: RequestFields) -> Result<NetworkSummary> {
    resolve(&NetworkRequest::try_from(fields)?)
}
