//! # Application Module
//!
//! Application service orchestrating the receive hook around the base app.

pub mod service;

pub use service::IbcMiddleware;
