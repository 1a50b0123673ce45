//! # QC-15 IBC Middleware
//!
//! Distinguished-asset interception for inbound ICS-20 transfers.
//!
//! **Subsystem ID:** 15
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Sit between the IBC transport and the transfer application, observe every
//! received packet after the transfer application settled it, and hand
//! receipts of distinguished assets (e.g. nBTC) to an auxiliary keeper:
//! - Base application runs first and owns the acknowledgement
//! - Only the leading hop of the denom trace is matched, against the
//!   receiving channel
//! - Keeper called at most once per packet, never retried
//!
//! ## Failure Isolation
//!
//! | Failure | Effect on ack | Diagnostic |
//! |---------|---------------|------------|
//! | Base app error ack | returned unchanged | none, hook skipped |
//! | Payload decode error | none | `warn` + metric |
//! | Keeper error | none | `error` + metric |
//! | Handshake error | propagated unchanged | none |
//!
//! ## Module Structure
//!
//! ```text
//! qc-15-ibc-middleware/
//! ├── domain/          # TransferRecord, DenomTrace, outcomes, errors
//! ├── algorithms/      # Decode, classify, dispatch
//! ├── ports/           # IbcMiddlewareApi, AssetRegistry, AuxiliaryKeeper
//! ├── adapters/        # In-memory registry, logging keeper
//! └── application/     # IbcMiddleware orchestrator
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{InMemoryAssetRegistry, LoggingKeeper, RegistryEntry};
pub use algorithms::{
    classify_denom, decode_transfer_packet, dispatch_auxiliary_action, DispatchRequest,
    DispatchResult,
};
pub use application::IbcMiddleware;
pub use config::MiddlewareConfig;
pub use domain::{
    invariant_ack_preserved, invariant_no_dispatch_on_failure, invariant_single_dispatch, Amount,
    Classification, DecodeError, DenomTrace, InterceptionOutcome, InterceptionReport,
    KeeperError, LeadingHop, RegistryError, TransferRecord, IBC_DENOM_PREFIX, TRACE_SEPARATOR,
};
pub use ports::{
    AssetRegistry, AuxiliaryKeeper, IbcMiddlewareApi, IbcModule, KeeperCall, MockKeeper,
    MockTransferApp, TRANSFER_VERSION,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
