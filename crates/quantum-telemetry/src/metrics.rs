//! Prometheus metrics for Quantum-Chain subsystems.
//!
//! All metrics follow the naming convention: `qc_<subsystem>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., ibc_packets_received_total)
//! - **Histogram**: Distribution of values (e.g., ibc_aux_dispatch_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // IBC MIDDLEWARE METRICS (Subsystem 15)
    // =========================================================================

    /// Received packets by interception outcome
    pub static ref IBC_PACKETS_RECEIVED: CounterVec = CounterVec::new(
        Opts::new("qc_ibc_packets_received_total", "Packets seen by the IBC middleware receive hook"),
        // disabled/base_failed/decode_failed/not_distinguished/dispatched/dispatch_failed
        &["outcome"]
    ).expect("metric creation failed");

    /// Auxiliary keeper call duration
    pub static ref IBC_AUX_DISPATCH_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "qc_ibc_aux_dispatch_duration_seconds",
            "Time spent in the auxiliary keeper for distinguished receipts"
        ).buckets(exponential_buckets(0.00001, 2.0, 15).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // ERROR METRICS
    // =========================================================================

    /// Subsystem errors by type
    pub static ref SUBSYSTEM_ERRORS: CounterVec = CounterVec::new(
        Opts::new("qc_subsystem_errors_total", "Errors by subsystem and type"),
        &["subsystem", "error_type"]
    ).expect("metric creation failed");
}

/// Handle to the registry the metrics were registered with.
#[derive(Clone)]
pub struct MetricsHandle {
    registry: Registry,
}

impl MetricsHandle {
    /// Registry holding every registered collector.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Register all metrics with the global registry.
///
/// Calling it more than once is fine; already registered collectors are
/// skipped.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // IBC middleware
        Box::new(IBC_PACKETS_RECEIVED.clone()),
        Box::new(IBC_AUX_DISPATCH_DURATION.clone()),
        // Errors
        Box::new(SUBSYSTEM_ERRORS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        registry: REGISTRY.clone(),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Count one received packet under `outcome`.
pub fn record_packet_outcome(outcome: &str) {
    IBC_PACKETS_RECEIVED.with_label_values(&[outcome]).inc();
}

/// Record how long one keeper call took.
pub fn observe_dispatch_duration(elapsed: Duration) {
    IBC_AUX_DISPATCH_DURATION.observe(elapsed.as_secs_f64());
}

/// Count an error for a subsystem.
pub fn record_subsystem_error(subsystem: &str, error_type: &str) {
    SUBSYSTEM_ERRORS
        .with_label_values(&[subsystem, error_type])
        .inc();
}
