//! # Domain Module
//!
//! Core domain types for the IBC middleware: transfer records, denomination
//! traces, interception outcomes and errors.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use value_objects::*;
