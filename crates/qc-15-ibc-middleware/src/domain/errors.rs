//! # Domain Errors
//!
//! Error types for the IBC middleware subsystem.
//!
//! None of these ever reach the transport: decode and keeper errors are
//! demoted to diagnostics by the orchestrator, registry errors belong to
//! governance.

use shared_types::{IdentifierError, U256};
use thiserror::Error;

/// Token amount (arbitrary precision, non-negative).
pub type Amount = U256;

/// Packet payload could not be decoded into a transfer record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload is not a JSON object.
    #[error("Invalid packet encoding: {0}")]
    InvalidEncoding(String),

    /// Required field absent.
    #[error("Missing field: {field}")]
    MissingField {
        /// Field name.
        field: &'static str,
    },

    /// Required field present but empty.
    #[error("Empty field: {field}")]
    EmptyField {
        /// Field name.
        field: &'static str,
    },

    /// Field present with the wrong JSON type.
    #[error("Field {field} must be {expected}")]
    InvalidFieldType {
        /// Field name.
        field: &'static str,
        /// Expected JSON type.
        expected: &'static str,
    },

    /// Amount is not a non-negative integer representable in 256 bits.
    #[error("Invalid amount {amount:?}: {reason}")]
    InvalidAmount {
        /// Raw amount as received.
        amount: String,
        /// Parse failure.
        reason: String,
    },
}

/// Auxiliary keeper failed to perform its action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeeperError {
    /// Business rule rejected the receipt.
    #[error("Auxiliary action rejected: {reason}")]
    Rejected {
        /// Why.
        reason: String,
    },

    /// Downstream module (pool, market) unavailable.
    #[error("Auxiliary target unavailable: {0}")]
    Unavailable(String),
}

/// Governance errors on the classification registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Base denomination is empty.
    #[error("Base denomination cannot be empty")]
    EmptyDenom,

    /// Base denomination contains a trace hop.
    #[error("Base denomination {0} must not start with a trace separator")]
    InvalidDenom(String),

    /// Genesis document malformed.
    #[error("Invalid registry genesis: {0}")]
    InvalidGenesis(String),

    /// Channel identity in an entry is invalid.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}
