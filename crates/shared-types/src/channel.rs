//! # Channel Handshake Types
//!
//! Arguments carried by the channel-open and channel-close callbacks.

use crate::identifiers::{ChannelId, PortId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Packets may be delivered in any order.
    #[default]
    Unordered,
    /// Packets are delivered in strictly increasing sequence order.
    Ordered,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unordered => f.write_str("ORDER_UNORDERED"),
            Self::Ordered => f.write_str("ORDER_ORDERED"),
        }
    }
}

/// Remote end of a channel during the handshake.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counterparty {
    /// Counterparty port.
    pub port_id: PortId,
    /// Counterparty channel; unknown during `open_init`.
    pub channel_id: Option<ChannelId>,
}

impl Counterparty {
    /// Create a counterparty.
    pub fn new(port_id: PortId, channel_id: Option<ChannelId>) -> Self {
        Self {
            port_id,
            channel_id,
        }
    }
}

/// Application version string negotiated during the handshake.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Wrap a version string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Empty version: the application picks its default.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// True if unset.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
