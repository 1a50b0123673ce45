//! # Shared Types Crate
//!
//! IBC primitives shared by the channel transport, the fungible-token
//! transfer application and any middleware stacked between them.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identifiers, packets and acknowledgements
//!   are defined once and used on both sides of every callback.
//! - **Validated Identifiers**: a `PortId` or `ChannelId` that exists is
//!   ICS-24 valid; no identifier contains the `/` trace separator.
//! - **Stable Wire Form**: `Acknowledgement` encodes to the exact JSON the
//!   counterparty and relayers expect.

pub mod acknowledgement;
pub mod channel;
pub mod errors;
pub mod identifiers;
pub mod module_trait;
pub mod packet;

pub use acknowledgement::{Acknowledgement, TRANSFER_SUCCESS_RESULT};
pub use channel::{Counterparty, Order, Version};
pub use errors::*;
pub use identifiers::{ChannelId, ChannelIdentity, PortId, Signer, TRANSFER_PORT};
pub use module_trait::{DynIbcModule, IbcModule};
pub use packet::{Packet, Sequence, TimeoutHeight};

// Re-export U256 from primitive-types for token amounts across crates
pub use primitive_types::U256;
