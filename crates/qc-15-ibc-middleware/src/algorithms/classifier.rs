//! # Asset Classifier
//!
//! Decides whether a received denomination is a distinguished asset.
//!
//! ## Algorithm
//!
//! 1. Split the leading `port/channel` hop off the trace.
//! 2. No hop: native to the sender, never distinguished.
//! 3. Hop through a channel other than `origin`: not distinguished.
//! 4. Otherwise look up the remainder in the registry.
//!
//! Only the leading hop is evaluated; a multi-hop remainder is looked up
//! verbatim.

use crate::domain::{Classification, DenomTrace};
use crate::ports::AssetRegistry;
use shared_types::ChannelIdentity;

/// Classify `denom` as received through `origin`.
pub fn classify_denom<R: AssetRegistry + ?Sized>(
    denom: &DenomTrace,
    origin: &ChannelIdentity,
    registry: &R,
) -> Classification {
    let hop = match denom.leading_hop() {
        Some(hop) => hop,
        None => return Classification::no_match(),
    };

    if !hop.is_via(origin) {
        return Classification::no_match();
    }

    let matched = registry.is_distinguished(origin, hop.remainder);
    Classification::resolved(hop.remainder, matched)
}
