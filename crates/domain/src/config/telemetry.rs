use serde::{Deserialize, Serialize};

use crate::telemetry::DEFAULT_HISTORY_LEN;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_cache_path")]
    pub cache_path: String,

    #[serde(default = "default_history_len")]
    pub history_len: usize,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
            history_len: default_history_len(),
        }
    }
}

fn default_cache_path() -> String {
    "seer-cpu-history.json".to_string()
}

fn default_history_len() -> usize {
    DEFAULT_HISTORY_LEN
}
