//! # Domain Value Objects
//!
//! Immutable value types for denomination provenance.
//!
//! A denomination trace is `port/channel/.../base`; the leading hop names
//! the channel the asset most recently arrived through.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::ChannelIdentity;
use std::fmt;

/// Hop separator inside a denomination trace.
pub const TRACE_SEPARATOR: char = '/';

/// Prefix of hashed voucher denominations.
pub const IBC_DENOM_PREFIX: &str = "ibc/";

/// Leading `port/channel` hop of a trace and everything after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadingHop<'a> {
    /// Port segment.
    pub port: &'a str,
    /// Channel segment.
    pub channel: &'a str,
    /// Rest of the trace; may contain further hops.
    pub remainder: &'a str,
}

impl LeadingHop<'_> {
    /// True if this hop names `channel`.
    pub fn is_via(&self, channel: &ChannelIdentity) -> bool {
        channel.matches(self.port, self.channel)
    }
}

/// Denomination string as carried in transfer packet data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DenomTrace(String);

impl DenomTrace {
    /// Wrap a raw denomination.
    pub fn new(denom: impl Into<String>) -> Self {
        Self(denom.into())
    }

    /// Borrow as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split off the leading hop.
    ///
    /// Needs three non-empty segments: `port`, `channel` and a remainder.
    /// `uatom`, `transfer/channel-0` and `transfer//sat` have no leading hop.
    pub fn leading_hop(&self) -> Option<LeadingHop<'_>> {
        let mut parts = self.0.splitn(3, TRACE_SEPARATOR);
        let port = parts.next().filter(|s| !s.is_empty())?;
        let channel = parts.next().filter(|s| !s.is_empty())?;
        let remainder = parts.next().filter(|s| !s.is_empty())?;
        Some(LeadingHop {
            port,
            channel,
            remainder,
        })
    }

    /// True if the denomination carries no hop (native to the sender).
    pub fn is_native(&self) -> bool {
        self.leading_hop().is_none()
    }

    /// Hashed voucher denomination: `ibc/` + upper-hex SHA-256 of the trace.
    /// Native denominations are returned unchanged.
    pub fn ibc_denom(&self) -> String {
        if self.is_native() {
            return self.0.clone();
        }
        let digest = Sha256::digest(self.0.as_bytes());
        format!("{}{}", IBC_DENOM_PREFIX, hex::encode_upper(digest))
    }
}

impl fmt::Display for DenomTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DenomTrace {
    fn from(denom: &str) -> Self {
        Self::new(denom)
    }
}

/// Classifier verdict.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Whether the asset is distinguished.
    pub matched: bool,
    /// Base denomination after the leading hop, when the hop matched the
    /// origin channel.
    pub base_denom: Option<String>,
}

impl Classification {
    /// No leading hop, or a hop through another channel.
    pub fn no_match() -> Self {
        Self::default()
    }

    /// Hop matched; registry said `matched`.
    pub fn resolved(base_denom: impl Into<String>, matched: bool) -> Self {
        Self {
            matched,
            base_denom: Some(base_denom.into()),
        }
    }
}
