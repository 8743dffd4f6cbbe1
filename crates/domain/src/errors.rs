use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid destination: {0}")]
    InvalidDestination(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid custom rule: {0}")]
    InvalidCustomRule(String),

    #[error("Malformed payload for topic '{topic}': {reason}")]
    MalformedPayload { topic: String, reason: String },

    #[error("Policy not found: {0}")]
    PolicyNotFound(String),

    #[error("No policies selected")]
    NoPoliciesSelected,

    #[error("No devices selected")]
    NoDevicesSelected,

    #[error("Bridge is not connected")]
    BridgeUnavailable,

    #[error("Bridge send failed for topic '{topic}': {reason}")]
    BridgeSendFailed { topic: String, reason: String },

    #[error("Firewall API error: {0}")]
    FirewallApi(String),

    #[error("Firewall API request timed out after {timeout_secs}s")]
    FirewallApiTimeout { timeout_secs: u64 },

    #[error("Telemetry cache error: {0}")]
    CacheError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn malformed(topic: impl Into<String>, reason: impl ToString) -> Self {
        DomainError::MalformedPayload {
            topic: topic.into(),
            reason: reason.to_string(),
        }
    }
}
