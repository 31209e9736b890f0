//! # Configuration
//!
//! Runtime tuning knobs for the notification core, resolved from defaults
//! or from `COURIER_*` environment variables.

use crate::error::{CourierError, Result};
use serde::{Deserialize, Serialize};

/// Tuning knobs applied per core.
///
/// A config travels with the core bundle it was created with: pass one to
/// [`CoreRegistry::get_core_with_config`](crate::registry::CoreRegistry::get_core_with_config)
/// and every registry in that core observes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierConfig {
    /// Emit a warning when a single notification name accumulates more
    /// observers than this. Large lists are usually a leak (observers
    /// registered without a matching removal).
    pub observer_warn_threshold: usize,
    /// Emit a debug event for every notification broadcast, including the
    /// snapshot size. Off by default; broadcast is a hot path.
    pub trace_dispatch: bool,
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            observer_warn_threshold: 64,
            trace_dispatch: false,
        }
    }
}

impl CourierConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(threshold) = std::env::var("COURIER_OBSERVER_WARN_THRESHOLD") {
            config.observer_warn_threshold = threshold.parse().map_err(|e| {
                CourierError::configuration(format!("Invalid observer_warn_threshold: {e}"))
            })?;
        }

        if let Ok(trace) = std::env::var("COURIER_TRACE_DISPATCH") {
            config.trace_dispatch = trace.parse().map_err(|e| {
                CourierError::configuration(format!("Invalid trace_dispatch: {e}"))
            })?;
        }

        Ok(config)
    }
}
