use seer_domain::{DomainError, OutboundMessage};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

use crate::ports::BridgePort;
use crate::services::SharedDeviceRegistry;

pub struct UnblockDeviceUseCase {
    registry: SharedDeviceRegistry,
    bridge: Arc<dyn BridgePort>,
}

impl UnblockDeviceUseCase {
    pub fn new(registry: SharedDeviceRegistry, bridge: Arc<dyn BridgePort>) -> Self {
        Self { registry, bridge }
    }

    /// Removes the device from the local list right away; the flow's
    /// `unblock_result` confirms it later.
    #[instrument(skip(self))]
    pub async fn execute(&self, mac: &str, ip: Option<String>) -> Result<(), DomainError> {
        if mac.trim().is_empty() {
            return Err(DomainError::NoDevicesSelected);
        }

        self.bridge.send(OutboundMessage::UnblockDevice {
            mac: mac.to_string(),
            ip,
        })?;

        self.registry.lock().await.mark_unblocked(mac, Instant::now());
        info!(mac = %mac, "Device unblock requested");
        Ok(())
    }
}
