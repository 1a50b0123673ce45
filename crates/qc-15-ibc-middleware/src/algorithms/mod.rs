//! # Algorithms Module
//!
//! The three steps of the interception hook: decode, classify, dispatch.

pub mod classifier;
pub mod dispatch;
pub mod packet_decoder;

pub use classifier::classify_denom;
pub use dispatch::{dispatch_auxiliary_action, DispatchRequest, DispatchResult};
pub use packet_decoder::decode_transfer_packet;
