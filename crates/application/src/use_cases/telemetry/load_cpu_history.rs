use seer_domain::CpuHistory;
use std::sync::Arc;
use tracing::{info, warn};

use crate::ports::TelemetryCachePort;
use crate::services::SharedTelemetryState;

pub struct LoadCpuHistoryUseCase {
    state: SharedTelemetryState,
    cache: Arc<dyn TelemetryCachePort>,
}

impl LoadCpuHistoryUseCase {
    pub fn new(state: SharedTelemetryState, cache: Arc<dyn TelemetryCachePort>) -> Self {
        Self { state, cache }
    }

    /// Restores the saved chart history. An unreadable cache is logged and
    /// the history starts empty. Returns the number of restored samples.
    pub async fn execute(&self) -> usize {
        let saved = match self.cache.load().await {
            Ok(Some(saved)) => saved,
            Ok(None) => return 0,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable CPU history cache");
                return 0;
            }
        };

        let mut state = self.state.lock().await;
        let capacity = state.cpu.capacity();
        state.cpu = CpuHistory::restore(saved, capacity);

        info!(samples = state.cpu.len(), "CPU history restored");
        state.cpu.len()
    }
}
