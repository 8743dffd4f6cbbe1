use seer_domain::{CustomRule, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::FirewallApiPort;

pub struct GetCustomRulesUseCase {
    api: Arc<dyn FirewallApiPort>,
}

impl GetCustomRulesUseCase {
    pub fn new(api: Arc<dyn FirewallApiPort>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<CustomRule>, DomainError> {
        let rules = self.api.list_custom_rules().await?;
        debug!(count = rules.len(), "Custom rules retrieved");
        Ok(rules)
    }
}
