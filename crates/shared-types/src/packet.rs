//! # Packet
//!
//! One unit of cross-chain data. Created by the transport, consumed once per
//! direction per sequence number.

use crate::identifiers::ChannelIdentity;
use serde::{Deserialize, Serialize};

/// Packet sequence number.
pub type Sequence = u64;

/// Height after which a packet times out. `(0, 0)` disables the check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeoutHeight {
    /// Counterparty revision number.
    pub revision_number: u64,
    /// Counterparty revision height.
    pub revision_height: u64,
}

impl TimeoutHeight {
    /// No height-based timeout.
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// A channel packet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Sequence number on the source channel.
    pub sequence: Sequence,
    /// Sending end.
    pub source: ChannelIdentity,
    /// Receiving end.
    pub destination: ChannelIdentity,
    /// Opaque application payload.
    pub data: Vec<u8>,
    /// Height-based timeout.
    pub timeout_height: TimeoutHeight,
    /// Timestamp-based timeout in nanoseconds; zero disables it.
    pub timeout_timestamp: u64,
}
