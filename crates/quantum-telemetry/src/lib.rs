//! # Quantum Telemetry
//!
//! Logging and metrics for Quantum-Chain subsystems.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with env filter, JSON or pretty output
//! - **Metrics**: Prometheus collectors in a global registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quantum_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::for_subsystem("15", "ibc-middleware");
//!     let _guard = init_telemetry(config).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `quantum-chain` | Service name in logs |
//! | `QC_LOG_LEVEL` | `info` | Log level filter |
//! | `QC_JSON_LOGS` | `false` | JSON log lines |
//! | `QC_SUBSYSTEM_ID` | `00` | Subsystem identifier |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{build_env_filter, init_logging, StructuredLogger};
pub use metrics::{
    encode_metrics, observe_dispatch_duration, record_packet_outcome, record_subsystem_error,
    register_metrics, MetricsHandle, IBC_AUX_DISPATCH_DURATION, IBC_PACKETS_RECEIVED,
    SUBSYSTEM_ERRORS,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Global subscriber could not be installed
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// Prometheus registration or encoding failed
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Bad filter directive or other config value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics and install structured logging.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let metrics = register_metrics()?;
    let logger = init_logging(&config)?;

    Ok(TelemetryGuard { logger, metrics })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    logger: StructuredLogger,
    metrics: MetricsHandle,
}

impl TelemetryGuard {
    /// Logger installed during init.
    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// Metrics handle registered during init.
    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}
