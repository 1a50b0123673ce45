//! # Domain Invariants
//!
//! Rules the orchestrator must never break, checked by tests and by
//! `debug_assert!` on the receive path.

use super::entities::InterceptionOutcome;
use shared_types::Acknowledgement;

/// Invariant: acknowledgement preservation.
///
/// The ack handed to the transport is identical in kind and payload to the
/// one the base application produced.
pub fn invariant_ack_preserved(base: &Acknowledgement, returned: &Acknowledgement) -> bool {
    base == returned
}

/// Invariant: fail-closed on base failure.
///
/// A failure ack from the base application means no auxiliary logic ran.
pub fn invariant_no_dispatch_on_failure(
    base: &Acknowledgement,
    outcome: &InterceptionOutcome,
) -> bool {
    base.is_success()
        || matches!(
            outcome,
            InterceptionOutcome::BaseFailed | InterceptionOutcome::Disabled
        )
}

/// Invariant: at most one keeper invocation per packet.
pub fn invariant_single_dispatch(keeper_calls_before: usize, keeper_calls_after: usize) -> bool {
    keeper_calls_after.saturating_sub(keeper_calls_before) <= 1
}
