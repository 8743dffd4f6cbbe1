use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BridgeConfig {
    /// `host:port` of the flow's line-delimited JSON endpoint.
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,

    #[serde(default = "default_send_retry_delay_ms")]
    pub send_retry_delay_ms: u64,

    #[serde(default = "default_send_retry_attempts")]
    pub send_retry_attempts: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
            send_retry_delay_ms: default_send_retry_delay_ms(),
            send_retry_attempts: default_send_retry_attempts(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:1889".to_string()
}

fn default_reconnect_delay_ms() -> u64 {
    2000
}

fn default_send_retry_delay_ms() -> u64 {
    200
}

fn default_send_retry_attempts() -> u32 {
    5
}
