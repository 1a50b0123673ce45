//! # Host Identifiers
//!
//! Port and channel identifiers as defined by ICS-24, plus the
//! `ChannelIdentity` pair used as the provenance key for denominations.
//!
//! ## Validation
//!
//! | Identifier | Length | Charset |
//! |------------|--------|---------|
//! | `PortId` | 2..=128 | alphanumerics, `. _ + - # [ ] < >` |
//! | `ChannelId` | 1..=64 | alphanumerics, `. _ + - # [ ] < >` |
//!
//! Neither identifier may contain `/`, which is the hop separator of
//! denomination traces.

use crate::errors::IdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum port identifier length.
pub const PORT_ID_MIN_LEN: usize = 2;
/// Maximum port identifier length.
pub const PORT_ID_MAX_LEN: usize = 128;
/// Minimum channel identifier length.
pub const CHANNEL_ID_MIN_LEN: usize = 1;
/// Maximum channel identifier length.
pub const CHANNEL_ID_MAX_LEN: usize = 64;

/// Port bound by the fungible token transfer application.
pub const TRANSFER_PORT: &str = "transfer";

fn validate_identifier(
    kind: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), IdentifierError> {
    if value.is_empty() {
        return Err(IdentifierError::Empty { kind });
    }
    if value.len() < min || value.len() > max {
        return Err(IdentifierError::InvalidLength {
            kind,
            value: value.to_string(),
            min,
            max,
        });
    }
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || ".-_+#[]<>".contains(*c)))
    {
        return Err(IdentifierError::InvalidCharacter {
            kind,
            value: value.to_string(),
            character: c,
        });
    }
    Ok(())
}

/// ICS-24 port identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PortId(String);

impl PortId {
    /// Create a validated port identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        validate_identifier("port", &value, PORT_ID_MIN_LEN, PORT_ID_MAX_LEN)?;
        Ok(Self(value))
    }

    /// The transfer application's port.
    pub fn transfer() -> Self {
        Self(TRANSFER_PORT.to_string())
    }

    /// Borrow as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ICS-24 channel identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelId(String);

impl ChannelId {
    /// Create a validated channel identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        validate_identifier("channel", &value, CHANNEL_ID_MIN_LEN, CHANNEL_ID_MAX_LEN)?;
        Ok(Self(value))
    }

    /// Canonical `channel-{n}` identifier.
    pub fn with_index(index: u64) -> Self {
        Self(format!("channel-{}", index))
    }

    /// Borrow as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_identifier_conversions {
    ($ty:ident) => {
        impl FromStr for $ty {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(id: $ty) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_identifier_conversions!(PortId);
impl_identifier_conversions!(ChannelId);

/// One end of a channel: `(port, channel)`.
///
/// Immutable once the channel is open. Used as the key for denomination
/// provenance: the first hop of a denom trace names a `ChannelIdentity`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChannelIdentity {
    /// Port identifier.
    pub port_id: PortId,
    /// Channel identifier.
    pub channel_id: ChannelId,
}

impl ChannelIdentity {
    /// Create a channel identity from validated parts.
    pub fn new(port_id: PortId, channel_id: ChannelId) -> Self {
        Self {
            port_id,
            channel_id,
        }
    }

    /// Parse and validate both parts.
    pub fn parse(port_id: &str, channel_id: &str) -> Result<Self, IdentifierError> {
        Ok(Self::new(port_id.parse()?, channel_id.parse()?))
    }

    /// True if `port` and `channel` name this identity.
    pub fn matches(&self, port: &str, channel: &str) -> bool {
        self.port_id.as_str() == port && self.channel_id.as_str() == channel
    }
}

impl fmt::Display for ChannelIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.port_id, self.channel_id)
    }
}

/// Bech32 (or otherwise chain-specific) account address as carried on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signer(String);

impl Signer {
    /// Wrap an address string. No format is enforced at this layer.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if no address was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
