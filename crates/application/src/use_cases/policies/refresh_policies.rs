use seer_domain::{DomainError, OutboundMessage};
use std::sync::Arc;
use tracing::info;

use crate::ports::BridgePort;

pub struct RefreshPoliciesUseCase {
    bridge: Arc<dyn BridgePort>,
}

impl RefreshPoliciesUseCase {
    pub fn new(bridge: Arc<dyn BridgePort>) -> Self {
        Self { bridge }
    }

    /// Asks the flow to push its full policy list.
    pub fn execute(&self) -> Result<(), DomainError> {
        info!("Requesting policy list");
        self.bridge.send(OutboundMessage::FetchPolicies)
    }
}
