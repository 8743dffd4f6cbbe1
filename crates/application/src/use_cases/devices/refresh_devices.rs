use seer_domain::{DomainError, OutboundMessage};
use std::sync::Arc;
use tracing::info;

use crate::ports::BridgePort;
use crate::services::SharedDeviceRegistry;

pub struct RefreshDevicesUseCase {
    registry: SharedDeviceRegistry,
    bridge: Arc<dyn BridgePort>,
}

impl RefreshDevicesUseCase {
    pub fn new(registry: SharedDeviceRegistry, bridge: Arc<dyn BridgePort>) -> Self {
        Self { registry, bridge }
    }

    pub fn leases(&self) -> Result<(), DomainError> {
        info!("Requesting DHCP leases");
        self.bridge.send(OutboundMessage::FetchDevices)
    }

    /// Drops the current blocked list first so a stale one is never shown
    /// while the fresh one is on its way.
    pub async fn blocked(&self) -> Result<(), DomainError> {
        self.registry.lock().await.clear_blocked();
        info!("Requesting blocked devices");
        self.bridge.send(OutboundMessage::FetchBlockedDevices)
    }
}
