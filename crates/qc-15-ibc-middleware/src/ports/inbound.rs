//! # Inbound Ports
//!
//! What the middleware offers. Towards the transport it is an
//! [`IbcModule`], indistinguishable from the application it wraps; towards
//! operators and tests it additionally exposes the audited receive path.

use crate::domain::{Classification, InterceptionReport};
use shared_types::{Acknowledgement, ChannelIdentity, Packet, Signer};

pub use shared_types::IbcModule;

/// Middleware API - inbound port.
pub trait IbcMiddlewareApi: IbcModule {
    /// Run the receive path and return the ack together with a report of
    /// what the interception hook did.
    ///
    /// The ack is exactly the one the wrapped application produced.
    fn process_recv_packet(
        &mut self,
        packet: &Packet,
        relayer: &Signer,
    ) -> (Acknowledgement, InterceptionReport);

    /// Classify a denomination as if it arrived through `channel`.
    fn classify(&self, denom: &str, channel: &ChannelIdentity) -> Classification;

    /// Whether the interception hook is active.
    fn is_enabled(&self) -> bool;
}
