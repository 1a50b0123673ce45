//! # IBC Middleware Service
//!
//! Wraps a base transfer application and hooks the receive path.
//!
//! ## Receive Path
//!
//! ```text
//! transport ──on_recv_packet──▶ IbcMiddleware
//!                                  │ 1. base app on_recv_packet (authoritative)
//!                                  │ 2. error ack ─────────────────▶ return ack
//!                                  │ 3. decode payload ── fail ────▶ warn, return ack
//!                                  │ 4. classify by destination hop
//!                                  │ 5. distinguished ─▶ keeper (once) ── fail ─▶ error, return ack
//!                                  ▼ 6. return ack unchanged
//! ```
//!
//! Every other callback is forwarded with identical arguments and its
//! result returned as-is.

use shared_types::{
    Acknowledgement, ChannelError, ChannelId, ChannelIdentity, Counterparty, IbcModule, Order,
    Packet, PortId, Signer, Version,
};
use tracing::{debug, error, warn};

use crate::algorithms::{
    classify_denom, decode_transfer_packet, dispatch_auxiliary_action, DispatchRequest,
};
use crate::config::MiddlewareConfig;
use crate::domain::{
    invariant_no_dispatch_on_failure, Classification, DenomTrace, InterceptionOutcome,
    InterceptionReport,
};
use crate::ports::{AssetRegistry, AuxiliaryKeeper, IbcMiddlewareApi};

/// Subsystem label for error metrics.
const SUBSYSTEM: &str = "qc-15";

/// IBC middleware wrapping a base application `A`.
///
/// From the transport's point of view it is the application it wraps: same
/// trait, same results.
pub struct IbcMiddleware<A: IbcModule, R: AssetRegistry, K: AuxiliaryKeeper> {
    /// Wrapped base application.
    app: A,
    /// Classification registry (read-only here).
    registry: R,
    /// Auxiliary keeper.
    keeper: K,
    /// Configuration.
    config: MiddlewareConfig,
}

impl<A: IbcModule, R: AssetRegistry, K: AuxiliaryKeeper> IbcMiddleware<A, R, K> {
    /// Wrap `app`.
    pub fn new(app: A, registry: R, keeper: K, config: MiddlewareConfig) -> Self {
        Self {
            app,
            registry,
            keeper,
            config,
        }
    }

    /// Wrapped application.
    pub fn inner(&self) -> &A {
        &self.app
    }

    /// Wrapped application, mutably.
    pub fn inner_mut(&mut self) -> &mut A {
        &mut self.app
    }

    /// Classification registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Auxiliary keeper.
    pub fn keeper(&self) -> &K {
        &self.keeper
    }

    /// Auxiliary keeper, mutably.
    pub fn keeper_mut(&mut self) -> &mut K {
        &mut self.keeper
    }

    /// Configuration.
    pub fn config(&self) -> &MiddlewareConfig {
        &self.config
    }

    /// Unwrap into `(app, registry, keeper)`.
    pub fn into_inner(self) -> (A, R, K) {
        (self.app, self.registry, self.keeper)
    }

    /// Steps 2-5 of the receive path. Never touches `ack`.
    fn intercept(&mut self, packet: &Packet, ack: &Acknowledgement) -> InterceptionOutcome {
        if !self.config.enabled {
            return InterceptionOutcome::Disabled;
        }

        if !ack.is_success() {
            return InterceptionOutcome::BaseFailed;
        }

        let record = match decode_transfer_packet(&packet.data) {
            Ok(record) => record,
            Err(e) => return InterceptionOutcome::DecodeFailed(e),
        };

        let channel = &packet.destination;
        let base_denom = match classify_denom(&record.denom, channel, &self.registry) {
            Classification {
                matched: true,
                base_denom: Some(base_denom),
            } => base_denom,
            _ => {
                return InterceptionOutcome::NotDistinguished {
                    denom: record.denom,
                }
            }
        };

        let dispatch = {
            let request = DispatchRequest::from_record(&record, channel, &base_denom);
            dispatch_auxiliary_action(&mut self.keeper, &request)
        };

        if self.config.emit_metrics {
            quantum_telemetry::observe_dispatch_duration(dispatch.elapsed);
        }

        match dispatch.result {
            Ok(()) => InterceptionOutcome::Dispatched {
                base_denom,
                receiver: record.receiver,
                amount: record.amount,
            },
            Err(error) => InterceptionOutcome::DispatchFailed { base_denom, error },
        }
    }

    /// Log and count one report.
    fn record(&self, report: &InterceptionReport) {
        let sequence = report.sequence;
        let channel = &report.channel;

        match &report.outcome {
            InterceptionOutcome::Disabled => {
                debug!(sequence, %channel, "[qc-15] Interception disabled, passing through");
            }
            InterceptionOutcome::BaseFailed => {
                debug!(sequence, %channel, "[qc-15] Base application rejected packet");
            }
            InterceptionOutcome::DecodeFailed(e) => {
                warn!(
                    sequence,
                    %channel,
                    error = %e,
                    "[qc-15] Failed to decode transfer packet data"
                );
            }
            InterceptionOutcome::NotDistinguished { denom } => {
                debug!(
                    sequence,
                    %channel,
                    %denom,
                    ibc_denom = %denom.ibc_denom(),
                    "[qc-15] Denom not distinguished"
                );
            }
            InterceptionOutcome::Dispatched {
                base_denom,
                receiver,
                amount,
            } => {
                debug!(
                    sequence,
                    %channel,
                    %base_denom,
                    %receiver,
                    %amount,
                    "[qc-15] Auxiliary action completed"
                );
            }
            InterceptionOutcome::DispatchFailed { base_denom, error } => {
                error!(
                    sequence,
                    %channel,
                    %base_denom,
                    error = %error,
                    "[qc-15] Auxiliary action failed, acknowledgement unchanged"
                );
            }
        }

        if self.config.emit_metrics {
            let label = report.outcome.label();
            quantum_telemetry::record_packet_outcome(label);
            if report.outcome.is_diagnostic_error() {
                quantum_telemetry::record_subsystem_error(SUBSYSTEM, label);
            }
        }
    }
}

impl<A: IbcModule, R: AssetRegistry, K: AuxiliaryKeeper> IbcMiddlewareApi
    for IbcMiddleware<A, R, K>
{
    fn process_recv_packet(
        &mut self,
        packet: &Packet,
        relayer: &Signer,
    ) -> (Acknowledgement, InterceptionReport) {
        let ack = self.app.on_recv_packet(packet, relayer);
        let outcome = self.intercept(packet, &ack);

        debug_assert!(invariant_no_dispatch_on_failure(&ack, &outcome));

        let report = InterceptionReport::new(packet.sequence, packet.destination.clone(), outcome);
        (ack, report)
    }

    fn classify(&self, denom: &str, channel: &ChannelIdentity) -> Classification {
        classify_denom(&DenomTrace::from(denom), channel, &self.registry)
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}

impl<A: IbcModule, R: AssetRegistry, K: AuxiliaryKeeper> IbcModule for IbcMiddleware<A, R, K> {
    fn on_chan_open_init(
        &mut self,
        order: Order,
        connection_hops: &[String],
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, ChannelError> {
        self.app.on_chan_open_init(
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
        self.app.on_chan_open_try(
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
        self.app.on_chan_open_ack(
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
        self.app.on_chan_open_confirm(port_id, channel_id)
    }

    fn on_chan_close_init(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        self.app.on_chan_close_init(port_id, channel_id)
    }

    fn on_chan_close_confirm(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        self.app.on_chan_close_confirm(port_id, channel_id)
    }

    fn on_recv_packet(&mut self, packet: &Packet, relayer: &Signer) -> Acknowledgement {
        let (ack, report) = self.process_recv_packet(packet, relayer);
        self.record(&report);
        ack
    }

    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &[u8],
        relayer: &Signer,
    ) -> Result<(), ChannelError> {
        self.app
            .on_acknowledgement_packet(packet, acknowledgement, relayer)
    }

    fn on_timeout_packet(&mut self, packet: &Packet, relayer: &Signer) -> Result<(), ChannelError> {
        self.app.on_timeout_packet(packet, relayer)
    }
}
