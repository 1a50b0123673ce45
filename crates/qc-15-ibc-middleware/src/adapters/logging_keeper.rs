//! Logging Keeper Adapter
//!
//! `AuxiliaryKeeper` that only announces each receipt. Chains without a
//! business action wired in yet run with this keeper.

use crate::domain::{Amount, KeeperError};
use crate::ports::outbound::AuxiliaryKeeper;
use shared_types::ChannelIdentity;
use tracing::info;

/// Keeper that logs receipts and keeps running totals.
#[derive(Debug, Default)]
pub struct LoggingKeeper {
    receipts: u64,
    total_amount: Amount,
}

impl LoggingKeeper {
    /// Create a new keeper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Receipts seen.
    pub fn receipts(&self) -> u64 {
        self.receipts
    }

    /// Sum of received amounts (saturating).
    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }
}

impl AuxiliaryKeeper for LoggingKeeper {
    fn on_distinguished_receipt(
        &mut self,
        receiver: &str,
        amount: Amount,
        channel: &ChannelIdentity,
    ) -> Result<(), KeeperError> {
        self.receipts += 1;
        self.total_amount = self.total_amount.saturating_add(amount);

        info!(
            receiver = %receiver,
            amount = %amount,
            channel = %channel,
            "[qc-15] Received distinguished asset via IBC"
        );
        Ok(())
    }
}
