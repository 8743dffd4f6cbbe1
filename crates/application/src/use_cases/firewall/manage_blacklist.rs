use seer_domain::{validate_ip, BlacklistEntry, DomainError, OutboundMessage};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::BridgePort;
use crate::services::SharedFirewallState;

/// Blacklist and firewall status requests go over the bridge; the flow
/// answers with `blacklistUpdate` or `firewallStatus`.
pub struct ManageBlacklistUseCase {
    state: SharedFirewallState,
    bridge: Arc<dyn BridgePort>,
}

impl ManageBlacklistUseCase {
    pub fn new(state: SharedFirewallState, bridge: Arc<dyn BridgePort>) -> Self {
        Self { state, bridge }
    }

    pub async fn list(&self) -> Vec<BlacklistEntry> {
        self.state.lock().await.blacklist().to_vec()
    }

    pub async fn rate_limited(&self) -> Option<u64> {
        self.state.lock().await.rate_limited()
    }

    #[instrument(skip(self))]
    pub fn add(&self, ip: &str) -> Result<(), DomainError> {
        let ip = validate_ip(ip)?;
        self.bridge.send(OutboundMessage::AddBlacklist { ip: ip.to_string() })?;
        info!(ip = %ip, "Blacklist addition requested");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn remove(&self, ip: &str) -> Result<(), DomainError> {
        let ip = ip.trim();
        if ip.is_empty() {
            return Err(DomainError::InvalidIpAddress(
                "Please enter an IP address".to_string(),
            ));
        }
        self.bridge.send(OutboundMessage::RemoveBlacklist { ip: ip.to_string() })?;
        info!(ip = %ip, "Blacklist removal requested");
        Ok(())
    }

    pub fn request_status(&self) -> Result<(), DomainError> {
        debug!("Requesting firewall status");
        self.bridge.send(OutboundMessage::GetFirewallStatus)
    }

    #[instrument(skip(self))]
    pub fn reload(&self) -> Result<(), DomainError> {
        info!("Firewall reload requested");
        self.bridge.send(OutboundMessage::ReloadFirewall)
    }
}
