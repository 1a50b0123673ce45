//! # Acknowledgement
//!
//! Result record written once per received packet. Relayers carry it back to
//! the sending chain, so its wire form must never change underneath the
//! counterparty.
//!
//! Wire form (ICS-20 / ibc-go `channeltypes.Acknowledgement` JSON):
//!
//! ```text
//! {"result":"<base64 bytes>"}   success
//! {"error":"<description>"}     failure
//! ```

use crate::errors::AckDecodeError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Result byte the transfer application writes on success.
pub const TRANSFER_SUCCESS_RESULT: u8 = 0x01;

/// Tagged acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Acknowledgement {
    /// Packet processed; opaque application result.
    Success(Vec<u8>),
    /// Packet rejected; human-readable reason.
    Error(String),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum WireAck {
    Result(String),
    Error(String),
}

impl Acknowledgement {
    /// The success ack the transfer application emits: result `[0x01]`.
    pub fn transfer_success() -> Self {
        Self::Success(vec![TRANSFER_SUCCESS_RESULT])
    }

    /// Failure ack with the given reason.
    pub fn error(reason: impl Into<String>) -> Self {
        Self::Error(reason.into())
    }

    /// True for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Result bytes, if successful.
    pub fn result(&self) -> Option<&[u8]> {
        match self {
            Self::Success(bytes) => Some(bytes),
            Self::Error(_) => None,
        }
    }

    /// Error description, if failed.
    pub fn error_description(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(reason) => Some(reason),
        }
    }

    /// Encode to the JSON wire form.
    pub fn to_json_bytes(&self) -> Vec<u8> {
        let wire = match self {
            Self::Success(bytes) => WireAck::Result(STANDARD.encode(bytes)),
            Self::Error(reason) => WireAck::Error(reason.clone()),
        };
        // Serializing a map with one string value cannot fail.
        serde_json::to_vec(&wire).unwrap_or_default()
    }

    /// Decode from the JSON wire form.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, AckDecodeError> {
        let wire: WireAck =
            serde_json::from_slice(bytes).map_err(|e| AckDecodeError::Malformed(e.to_string()))?;
        match wire {
            WireAck::Result(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map(Self::Success)
                .map_err(|e| AckDecodeError::InvalidBase64(e.to_string())),
            WireAck::Error(reason) => Ok(Self::Error(reason)),
        }
    }
}
