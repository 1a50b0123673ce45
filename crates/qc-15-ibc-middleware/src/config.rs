//! # Middleware Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QC_IBC_MIDDLEWARE_ENABLED` | `true` | Run the interception hook on receive |
//! | `QC_IBC_MIDDLEWARE_METRICS` | `true` | Record Prometheus metrics per packet |

use serde::{Deserialize, Serialize};
use std::env;

/// IBC middleware configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Run decode/classify/dispatch after a successful receive. When off the
    /// middleware is a pure pass-through.
    pub enabled: bool,

    /// Record interception outcomes in the global metrics registry.
    pub emit_metrics: bool,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            emit_metrics: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl MiddlewareConfig {
    /// Config for tests: hook on, metrics off.
    pub fn for_testing() -> Self {
        Self {
            enabled: true,
            emit_metrics: false,
        }
    }

    /// Pass-through only.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Read from the environment; unset or unparsable values keep defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source using the `QC_IBC_MIDDLEWARE_*` keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|v| parse_flag(&v))
                .unwrap_or(default)
        };
        Self {
            enabled: flag("QC_IBC_MIDDLEWARE_ENABLED", defaults.enabled),
            emit_metrics: flag("QC_IBC_MIDDLEWARE_METRICS", defaults.emit_metrics),
        }
    }
}
