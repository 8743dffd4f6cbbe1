use seer_domain::{DomainError, OutboundMessage};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BridgePort;

pub struct RemoveDevicesUseCase {
    bridge: Arc<dyn BridgePort>,
}

impl RemoveDevicesUseCase {
    pub fn new(bridge: Arc<dyn BridgePort>) -> Self {
        Self { bridge }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, macs: Vec<String>) -> Result<(), DomainError> {
        if macs.is_empty() {
            return Err(DomainError::NoDevicesSelected);
        }
        info!(count = macs.len(), "Removing DHCP devices");
        self.bridge.send(OutboundMessage::RemoveDevices(macs))
    }
}
