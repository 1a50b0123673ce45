//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits: the classification registry and a
//! logging keeper.

mod logging_keeper;
mod registry;

pub use logging_keeper::LoggingKeeper;
pub use registry::{InMemoryAssetRegistry, RegistryEntry};
