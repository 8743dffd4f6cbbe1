use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulerConfig {
    /// Delay before the first evaluation pass, so the initial policy list
    /// has time to arrive.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default = "default_initial_fetch_delay_ms")]
    pub initial_fetch_delay_ms: u64,

    /// Gap between retracting the old destination and submitting the new
    /// one when a policy is edited.
    #[serde(default = "default_edit_resubmit_delay_ms")]
    pub edit_resubmit_delay_ms: u64,

    #[serde(default = "default_firewall_status_interval_secs")]
    pub firewall_status_interval_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay_ms(),
            interval_secs: default_interval_secs(),
            initial_fetch_delay_ms: default_initial_fetch_delay_ms(),
            edit_resubmit_delay_ms: default_edit_resubmit_delay_ms(),
            firewall_status_interval_secs: default_firewall_status_interval_secs(),
        }
    }
}

fn default_initial_delay_ms() -> u64 {
    1500
}

fn default_interval_secs() -> u64 {
    30
}

fn default_initial_fetch_delay_ms() -> u64 {
    1000
}

fn default_edit_resubmit_delay_ms() -> u64 {
    500
}

fn default_firewall_status_interval_secs() -> u64 {
    30
}
