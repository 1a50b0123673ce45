//! # Auxiliary Action Dispatcher
//!
//! Hands a settled distinguished-asset receipt to the keeper.
//!
//! The keeper is called exactly once per qualifying packet and never
//! retried within the callback. Its result is returned as-is; deciding that
//! a failure is non-fatal is the orchestrator's job.

use crate::domain::{Amount, KeeperError, TransferRecord};
use crate::ports::AuxiliaryKeeper;
use shared_types::ChannelIdentity;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Keeper input for one qualifying packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchRequest<'a> {
    /// Receiver on this chain.
    pub receiver: &'a str,
    /// Amount settled by the base application.
    pub amount: Amount,
    /// Channel the asset arrived through.
    pub channel: &'a ChannelIdentity,
    /// Resolved base denomination (diagnostics only).
    pub base_denom: &'a str,
}

impl<'a> DispatchRequest<'a> {
    /// Build from a decoded transfer.
    pub fn from_record(
        record: &'a TransferRecord,
        channel: &'a ChannelIdentity,
        base_denom: &'a str,
    ) -> Self {
        Self {
            receiver: &record.receiver,
            amount: record.amount,
            channel,
            base_denom,
        }
    }
}

/// Keeper result plus how long the keeper took.
#[derive(Debug)]
pub struct DispatchResult {
    /// Keeper outcome.
    pub result: Result<(), KeeperError>,
    /// Wall time spent inside the keeper.
    pub elapsed: Duration,
}

/// Invoke the keeper once for `request`.
pub fn dispatch_auxiliary_action<K: AuxiliaryKeeper + ?Sized>(
    keeper: &mut K,
    request: &DispatchRequest<'_>,
) -> DispatchResult {
    info!(
        receiver = %request.receiver,
        amount = %request.amount,
        channel = %request.channel,
        base_denom = %request.base_denom,
        "[qc-15] Dispatching distinguished asset receipt"
    );

    let start = Instant::now();
    let result =
        keeper.on_distinguished_receipt(request.receiver, request.amount, request.channel);
    let elapsed = start.elapsed();

    debug!(
        elapsed_us = elapsed.as_micros() as u64,
        ok = result.is_ok(),
        "[qc-15] Keeper returned"
    );

    DispatchResult { result, elapsed }
}
