//! # Outbound Ports
//!
//! Traits for the collaborators the middleware depends on: the
//! classification registry and the auxiliary keeper. The wrapped base
//! application is consumed through [`shared_types::IbcModule`].

use crate::domain::{Amount, KeeperError};
use shared_types::{
    Acknowledgement, ChannelError, ChannelId, ChannelIdentity, Counterparty, IbcModule, Order,
    Packet, PortId, Signer, Version,
};
use std::sync::Arc;

/// Read-only view of the asset classification registry.
///
/// Owned and mutated by governance; the middleware only queries it.
pub trait AssetRegistry: Send + Sync {
    /// Is `base_denom`, arriving through `channel`, a distinguished asset?
    fn is_distinguished(&self, channel: &ChannelIdentity, base_denom: &str) -> bool;
}

impl<T: AssetRegistry + ?Sized> AssetRegistry for &T {
    fn is_distinguished(&self, channel: &ChannelIdentity, base_denom: &str) -> bool {
        (**self).is_distinguished(channel, base_denom)
    }
}

impl<T: AssetRegistry + ?Sized> AssetRegistry for Arc<T> {
    fn is_distinguished(&self, channel: &ChannelIdentity, base_denom: &str) -> bool {
        (**self).is_distinguished(channel, base_denom)
    }
}

/// Business keeper reacting to received distinguished assets
/// (liquidity deposit, lending, ...).
pub trait AuxiliaryKeeper: Send {
    /// Perform the auxiliary action for a settled receipt.
    fn on_distinguished_receipt(
        &mut self,
        receiver: &str,
        amount: Amount,
        channel: &ChannelIdentity,
    ) -> Result<(), KeeperError>;
}

impl<K: AuxiliaryKeeper + ?Sized> AuxiliaryKeeper for Box<K> {
    fn on_distinguished_receipt(
        &mut self,
        receiver: &str,
        amount: Amount,
        channel: &ChannelIdentity,
    ) -> Result<(), KeeperError> {
        (**self).on_distinguished_receipt(receiver, amount, channel)
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// ICS-20 application version.
pub const TRANSFER_VERSION: &str = "ics20-1";

/// Mock transfer application with a scripted receive ack.
///
/// Negotiates `ics20-1`, refuses user-initiated close, and records every
/// callback it sees.
#[derive(Clone, Debug)]
pub struct MockTransferApp {
    /// Ack returned by every `on_recv_packet`.
    pub recv_ack: Acknowledgement,
    /// Error returned by ack/timeout callbacks, if set.
    pub packet_callback_error: Option<ChannelError>,
    /// Callback names in invocation order.
    pub calls: Vec<&'static str>,
    /// Packets passed to `on_recv_packet`.
    pub received: Vec<Packet>,
}

impl Default for MockTransferApp {
    fn default() -> Self {
        Self::succeeding()
    }
}

impl MockTransferApp {
    /// Settles every packet.
    pub fn succeeding() -> Self {
        Self::with_ack(Acknowledgement::transfer_success())
    }

    /// Rejects every packet with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self::with_ack(Acknowledgement::error(reason))
    }

    /// Returns `ack` for every packet.
    pub fn with_ack(recv_ack: Acknowledgement) -> Self {
        Self {
            recv_ack,
            packet_callback_error: None,
            calls: Vec::new(),
            received: Vec::new(),
        }
    }

    fn negotiate(&self, proposed: &Version) -> Result<Version, ChannelError> {
        if proposed.is_empty() || proposed.as_str() == TRANSFER_VERSION {
            return Ok(Version::new(TRANSFER_VERSION));
        }
        Err(ChannelError::InvalidVersion {
            expected: TRANSFER_VERSION.to_string(),
            got: proposed.to_string(),
        })
    }

    fn packet_callback_result(&self) -> Result<(), ChannelError> {
        match &self.packet_callback_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl IbcModule for MockTransferApp {
    fn on_chan_open_init(
        &mut self,
        order: Order,
        _connection_hops: &[String],
        _port_id: &PortId,
        _channel_id: &ChannelId,
        _counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, ChannelError> {
        self.calls.push("on_chan_open_init");
        if order != Order::Unordered {
            return Err(ChannelError::InvalidOrdering {
                expected: Order::Unordered.to_string(),
                got: order.to_string(),
            });
        }
        self.negotiate(version)
    }

    fn on_chan_open_try(
        &mut self,
        order: Order,
        _connection_hops: &[String],
        _port_id: &PortId,
        _channel_id: &ChannelId,
        _counterparty: &Counterparty,
        counterparty_version: &Version,
    ) -> Result<Version, ChannelError> {
        self.calls.push("on_chan_open_try");
        if order != Order::Unordered {
            return Err(ChannelError::InvalidOrdering {
                expected: Order::Unordered.to_string(),
                got: order.to_string(),
            });
        }
        if counterparty_version.as_str() != TRANSFER_VERSION {
            return Err(ChannelError::InvalidCounterpartyVersion {
                expected: TRANSFER_VERSION.to_string(),
                got: counterparty_version.to_string(),
            });
        }
        Ok(Version::new(TRANSFER_VERSION))
    }

    fn on_chan_open_ack(
        &mut self,
        _port_id: &PortId,
        _channel_id: &ChannelId,
        _counterparty_channel_id: &ChannelId,
        counterparty_version: &Version,
    ) -> Result<(), ChannelError> {
        self.calls.push("on_chan_open_ack");
        if counterparty_version.as_str() != TRANSFER_VERSION {
            return Err(ChannelError::InvalidCounterpartyVersion {
                expected: TRANSFER_VERSION.to_string(),
                got: counterparty_version.to_string(),
            });
        }
        Ok(())
    }

    fn on_chan_open_confirm(
        &mut self,
        _port_id: &PortId,
        _channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        self.calls.push("on_chan_open_confirm");
        Ok(())
    }

    fn on_chan_close_init(
        &mut self,
        _port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        self.calls.push("on_chan_close_init");
        Err(ChannelError::CloseNotAllowed {
            channel_id: channel_id.to_string(),
        })
    }

    fn on_chan_close_confirm(
        &mut self,
        _port_id: &PortId,
        _channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        self.calls.push("on_chan_close_confirm");
        Ok(())
    }

    fn on_recv_packet(&mut self, packet: &Packet, _relayer: &Signer) -> Acknowledgement {
        self.calls.push("on_recv_packet");
        self.received.push(packet.clone());
        self.recv_ack.clone()
    }

    fn on_acknowledgement_packet(
        &mut self,
        _packet: &Packet,
        _acknowledgement: &[u8],
        _relayer: &Signer,
    ) -> Result<(), ChannelError> {
        self.calls.push("on_acknowledgement_packet");
        self.packet_callback_result()
    }

    fn on_timeout_packet(
        &mut self,
        _packet: &Packet,
        _relayer: &Signer,
    ) -> Result<(), ChannelError> {
        self.calls.push("on_timeout_packet");
        self.packet_callback_result()
    }
}

/// A recorded keeper invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeeperCall {
    /// Receiver address.
    pub receiver: String,
    /// Amount.
    pub amount: Amount,
    /// Receiving channel.
    pub channel: ChannelIdentity,
}

/// Mock keeper recording every call.
#[derive(Clone, Debug, Default)]
pub struct MockKeeper {
    /// Calls in order.
    pub calls: Vec<KeeperCall>,
    /// Error returned from every call, if set.
    pub failure: Option<KeeperError>,
}

impl MockKeeper {
    /// Keeper that fails every call with `error`.
    pub fn failing(error: KeeperError) -> Self {
        Self {
            calls: Vec::new(),
            failure: Some(error),
        }
    }
}

impl AuxiliaryKeeper for MockKeeper {
    fn on_distinguished_receipt(
        &mut self,
        receiver: &str,
        amount: Amount,
        channel: &ChannelIdentity,
    ) -> Result<(), KeeperError> {
        self.calls.push(KeeperCall {
            receiver: receiver.to_string(),
            amount,
            channel: channel.clone(),
        });
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
