//! # Domain Entities
//!
//! Records produced while handling one received packet. None of them
//! outlive the callback invocation.

use super::errors::{Amount, DecodeError, KeeperError};
use super::value_objects::DenomTrace;
use serde::{Deserialize, Serialize};
use shared_types::{ChannelIdentity, Sequence};

/// Decoded fungible token transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Denomination trace as sent.
    pub denom: DenomTrace,
    /// Amount transferred.
    pub amount: Amount,
    /// Sender address on the source chain.
    pub sender: String,
    /// Receiver address on this chain.
    pub receiver: String,
    /// Optional memo (ICS-20 v2).
    pub memo: Option<String>,
}

/// What the middleware did with a received packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterceptionOutcome {
    /// Interception switched off; pure pass-through.
    Disabled,
    /// Base application returned a failure ack; nothing else ran.
    BaseFailed,
    /// Payload did not decode; ack returned untouched.
    DecodeFailed(DecodeError),
    /// Asset not distinguished; keeper not called.
    NotDistinguished {
        /// Denomination as carried in the packet.
        denom: DenomTrace,
    },
    /// Keeper called and succeeded.
    Dispatched {
        /// Resolved base denomination.
        base_denom: String,
        /// Receiver passed to the keeper.
        receiver: String,
        /// Amount passed to the keeper.
        amount: Amount,
    },
    /// Keeper called and failed; ack returned untouched.
    DispatchFailed {
        /// Resolved base denomination.
        base_denom: String,
        /// Keeper failure.
        error: KeeperError,
    },
}

impl InterceptionOutcome {
    /// Stable label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::BaseFailed => "base_failed",
            Self::DecodeFailed(_) => "decode_failed",
            Self::NotDistinguished { .. } => "not_distinguished",
            Self::Dispatched { .. } => "dispatched",
            Self::DispatchFailed { .. } => "dispatch_failed",
        }
    }

    /// True if the middleware's own logic failed (decode or dispatch).
    pub fn is_diagnostic_error(&self) -> bool {
        matches!(self, Self::DecodeFailed(_) | Self::DispatchFailed { .. })
    }

    /// True if the keeper was invoked.
    pub fn keeper_invoked(&self) -> bool {
        matches!(self, Self::Dispatched { .. } | Self::DispatchFailed { .. })
    }
}

/// Diagnostic record for one received packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterceptionReport {
    /// Packet sequence.
    pub sequence: Sequence,
    /// Receiving channel.
    pub channel: ChannelIdentity,
    /// Outcome.
    pub outcome: InterceptionOutcome,
}

impl InterceptionReport {
    /// Create a report.
    pub fn new(sequence: Sequence, channel: ChannelIdentity, outcome: InterceptionOutcome) -> Self {
        Self {
            sequence,
            channel,
            outcome,
        }
    }
}
