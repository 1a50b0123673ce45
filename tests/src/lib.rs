//! # Quantum-Chain Test Suite
//!
//! Unified test crate for the IBC middleware stack.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── ibc_middleware_benchmarks.rs  # Receive path cost per outcome
//! └── src/
//!     ├── fixtures.rs   # Port router, relay, shared keeper
//!     └── integration/  # Router drop-in and failure isolation flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # By category
//! cargo test -p qc-tests integration::
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```
