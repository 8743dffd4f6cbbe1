use seer_domain::{CpuHistory, MemoryUsage};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedTelemetryState = Arc<Mutex<TelemetryState>>;

/// CPU chart history plus the latest memory reading. Only the CPU history
/// is persisted.
#[derive(Debug, Default)]
pub struct TelemetryState {
    pub cpu: CpuHistory,
    pub memory: Option<MemoryUsage>,
}

impl TelemetryState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cpu: CpuHistory::with_capacity(capacity),
            memory: None,
        }
    }

    pub fn shared(capacity: usize) -> SharedTelemetryState {
        Arc::new(Mutex::new(Self::with_capacity(capacity)))
    }
}
