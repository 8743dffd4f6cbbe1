use seer_domain::{BlockedDevice, DhcpLease};

use crate::services::SharedDeviceRegistry;

pub struct GetDevicesUseCase {
    registry: SharedDeviceRegistry,
}

impl GetDevicesUseCase {
    pub fn new(registry: SharedDeviceRegistry) -> Self {
        Self { registry }
    }

    pub async fn leases(&self) -> Vec<DhcpLease> {
        self.registry.lock().await.leases().to_vec()
    }

    pub async fn blocked(&self) -> Vec<BlockedDevice> {
        self.registry.lock().await.blocked().to_vec()
    }
}
