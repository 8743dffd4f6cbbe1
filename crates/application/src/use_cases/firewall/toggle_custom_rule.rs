use seer_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::ports::{FirewallApiPort, NotificationLevel, NotifierPort};

pub struct ToggleCustomRuleUseCase {
    api: Arc<dyn FirewallApiPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl ToggleCustomRuleUseCase {
    pub fn new(api: Arc<dyn FirewallApiPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { api, notifier }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64, enabled: bool) -> Result<(), DomainError> {
        if let Err(e) = self.api.toggle_custom_rule(id, enabled).await {
            error!(rule_id = id, error = %e, "Failed to toggle custom rule");
            self.notifier
                .notify(NotificationLevel::Error, &format!("Failed to update rule: {}", e));
            return Err(e);
        }

        info!(rule_id = id, enabled, "Custom rule toggled");
        Ok(())
    }
}
