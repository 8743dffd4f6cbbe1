use seer_domain::{DomainError, FirewallRule};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::FirewallApiPort;

pub struct GetFirewallRulesUseCase {
    api: Arc<dyn FirewallApiPort>,
}

impl GetFirewallRulesUseCase {
    pub fn new(api: Arc<dyn FirewallApiPort>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<FirewallRule>, DomainError> {
        let rules = self.api.list_rules().await?;
        debug!(count = rules.len(), "Firewall rules retrieved");
        Ok(rules)
    }
}
