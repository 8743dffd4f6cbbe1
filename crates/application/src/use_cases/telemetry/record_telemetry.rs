use seer_domain::TelemetrySample;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::ports::{ClockPort, TelemetryCachePort};
use crate::services::SharedTelemetryState;

pub struct RecordTelemetryUseCase {
    state: SharedTelemetryState,
    cache: Arc<dyn TelemetryCachePort>,
    clock: Arc<dyn ClockPort>,
}

impl RecordTelemetryUseCase {
    pub fn new(
        state: SharedTelemetryState,
        cache: Arc<dyn TelemetryCachePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            state,
            cache,
            clock,
        }
    }

    /// A sample with per-core figures becomes a new CPU chart point and the
    /// history is saved right away. Memory readings only replace the latest
    /// value. Returns whether a CPU point was added.
    pub async fn execute(&self, sample: TelemetrySample) -> bool {
        let snapshot = {
            let mut state = self.state.lock().await;

            if let Some(memory) = sample.memory {
                state.memory = Some(memory);
            }

            let Some(cores) = sample.cores else {
                return false;
            };

            let overall = sample.overall.unwrap_or(0.0);
            state.cpu.push(self.clock.timestamp_label(), cores, overall);
            debug!(samples = state.cpu.len(), overall, "CPU sample recorded");
            state.cpu.clone()
        };

        if let Err(e) = self.cache.save(&snapshot).await {
            warn!(error = %e, "Failed to persist CPU history");
        }

        true
    }
}
