//! # Channel Application Trait
//!
//! The callback contract every channel application exposes to the transport
//! (ICS-26). The router holds one `IbcModule` per bound port.
//!
//! Middleware implements the same trait and owns the application it wraps,
//! so the router cannot tell a wrapped stack from the bare application.
//!
//! ## Example
//!
//! ```rust,ignore
//! use shared_types::{Acknowledgement, IbcModule, Packet, Signer};
//!
//! struct Wrapper<A: IbcModule> { app: A }
//!
//! impl<A: IbcModule> IbcModule for Wrapper<A> {
//!     fn on_recv_packet(&mut self, packet: &Packet, relayer: &Signer) -> Acknowledgement {
//!         let ack = self.app.on_recv_packet(packet, relayer);
//!         // observe `ack`, never replace it
//!         ack
//!     }
//!     // every other callback forwards to `self.app`
//! }
//! ```

use crate::acknowledgement::Acknowledgement;
use crate::channel::{Counterparty, Order, Version};
use crate::errors::ChannelError;
use crate::identifiers::{ChannelId, PortId, Signer};
use crate::packet::Packet;

/// Channel-callback contract.
///
/// Callbacks run synchronously inside the transport's sequential packet loop.
/// Handshake callbacks and ack/timeout callbacks may fail with
/// [`ChannelError`]; `on_recv_packet` always produces an
/// [`Acknowledgement`], encoding failure inside it.
pub trait IbcModule: Send {
    /// Channel-open step 1 on the initiating chain. Returns the version the
    /// application agrees to.
    #[allow(clippy::too_many_arguments)]
    fn on_chan_open_init(
        &mut self,
        order: Order,
        connection_hops: &[String],
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, ChannelError>;

    /// Channel-open step 2 on the counterparty chain.
    #[allow(clippy::too_many_arguments)]
    fn on_chan_open_try(
        &mut self,
        order: Order,
        connection_hops: &[String],
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty: &Counterparty,
        counterparty_version: &Version,
    ) -> Result<Version, ChannelError>;

    /// Channel-open step 3 on the initiating chain.
    fn on_chan_open_ack(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty_channel_id: &ChannelId,
        counterparty_version: &Version,
    ) -> Result<(), ChannelError>;

    /// Channel-open step 4 on the counterparty chain.
    fn on_chan_open_confirm(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError>;

    /// User-initiated close.
    fn on_chan_close_init(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError>;

    /// Close confirmed by the counterparty.
    fn on_chan_close_confirm(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError>;

    /// Process a received packet. Called exactly once per packet.
    fn on_recv_packet(&mut self, packet: &Packet, relayer: &Signer) -> Acknowledgement;

    /// Process the counterparty's acknowledgement of a packet this chain sent.
    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &[u8],
        relayer: &Signer,
    ) -> Result<(), ChannelError>;

    /// Process the timeout of a packet this chain sent.
    fn on_timeout_packet(&mut self, packet: &Packet, relayer: &Signer)
        -> Result<(), ChannelError>;
}

/// A type-erased application handle for the port router.
pub type DynIbcModule = Box<dyn IbcModule>;

impl<M: IbcModule + ?Sized> IbcModule for Box<M> {
    fn on_chan_open_init(
        &mut self,
        order: Order,
        connection_hops: &[String],
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, ChannelError> {
        (**self).on_chan_open_init(
            order,
            connection_hops,
            port_id,
            channel_id,
            counterparty,
            version,
        )
    }

    fn on_chan_open_try(
        &mut self,
        order: Order,
        connection_hops: &[String],
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty: &Counterparty,
        counterparty_version: &Version,
    ) -> Result<Version, ChannelError> {
        (**self).on_chan_open_try(
            order,
            connection_hops,
            port_id,
            channel_id,
            counterparty,
            counterparty_version,
        )
    }

    fn on_chan_open_ack(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty_channel_id: &ChannelId,
        counterparty_version: &Version,
    ) -> Result<(), ChannelError> {
        (**self).on_chan_open_ack(
            port_id,
            channel_id,
            counterparty_channel_id,
            counterparty_version,
        )
    }

    fn on_chan_open_confirm(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        (**self).on_chan_open_confirm(port_id, channel_id)
    }

    fn on_chan_close_init(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        (**self).on_chan_close_init(port_id, channel_id)
    }

    fn on_chan_close_confirm(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        (**self).on_chan_close_confirm(port_id, channel_id)
    }

    fn on_recv_packet(&mut self, packet: &Packet, relayer: &Signer) -> Acknowledgement {
        (**self).on_recv_packet(packet, relayer)
    }

    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &[u8],
        relayer: &Signer,
    ) -> Result<(), ChannelError> {
        (**self).on_acknowledgement_packet(packet, acknowledgement, relayer)
    }

    fn on_timeout_packet(
        &mut self,
        packet: &Packet,
        relayer: &Signer,
    ) -> Result<(), ChannelError> {
        (**self).on_timeout_packet(packet, relayer)
    }
}
