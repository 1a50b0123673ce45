//! # Error Types
//!
//! Errors shared by the transport, the base transfer application and any
//! middleware stacked on top of it.

use thiserror::Error;

/// Invalid ICS-24 host identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Identifier is empty.
    #[error("{kind} identifier cannot be empty")]
    Empty { kind: &'static str },

    /// Identifier length out of bounds.
    #[error("{kind} identifier {value} has invalid length: expected {min}..={max}")]
    InvalidLength {
        kind: &'static str,
        value: String,
        min: usize,
        max: usize,
    },

    /// Identifier contains a character outside the ICS-24 charset.
    #[error("{kind} identifier {value} contains invalid character {character:?}")]
    InvalidCharacter {
        kind: &'static str,
        value: String,
        character: char,
    },
}

/// Errors returned by channel-callback implementations.
///
/// Handshake callbacks and the ack/timeout callbacks return this type;
/// middleware propagates it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// Channel ordering not supported by the application.
    #[error("Invalid channel ordering: expected {expected}, got {got}")]
    InvalidOrdering { expected: String, got: String },

    /// Port does not belong to the application.
    #[error("Invalid port: expected {expected}, got {got}")]
    InvalidPort { expected: String, got: String },

    /// Version negotiation failed.
    #[error("Invalid version: expected {expected}, got {got}")]
    InvalidVersion { expected: String, got: String },

    /// Counterparty version does not match.
    #[error("Invalid counterparty version: expected {expected}, got {got}")]
    InvalidCounterpartyVersion { expected: String, got: String },

    /// The application refuses to close the channel.
    #[error("Channel {channel_id} cannot be closed by the user")]
    CloseNotAllowed { channel_id: String },

    /// Packet data or acknowledgement could not be interpreted.
    #[error("Invalid packet data: {0}")]
    InvalidPacketData(String),

    /// Application-defined failure.
    #[error("Application error: {description}")]
    AppModule { description: String },
}

/// Errors decoding an acknowledgement from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AckDecodeError {
    /// Not valid JSON, or not one of the two ack shapes.
    #[error("Malformed acknowledgement: {0}")]
    Malformed(String),

    /// `result` field is not valid base64.
    #[error("Invalid base64 in acknowledgement result: {0}")]
    InvalidBase64(String),
}
