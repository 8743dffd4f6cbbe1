use seer_domain::{DomainError, OutboundMessage, SystemAction};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BridgePort;

pub struct SystemActionUseCase {
    bridge: Arc<dyn BridgePort>,
}

impl SystemActionUseCase {
    pub fn new(bridge: Arc<dyn BridgePort>) -> Self {
        Self { bridge }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, action: SystemAction) -> Result<(), DomainError> {
        self.bridge.send(OutboundMessage::System(action))?;
        info!(action = action.to_str(), "System action requested");
        Ok(())
    }
}
