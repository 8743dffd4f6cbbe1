use seer_domain::{DomainError, RuleToggleField};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::ports::{FirewallApiPort, NotificationLevel, NotifierPort};

pub struct ToggleFirewallRuleUseCase {
    api: Arc<dyn FirewallApiPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl ToggleFirewallRuleUseCase {
    pub fn new(api: Arc<dyn FirewallApiPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { api, notifier }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: i64,
        field: RuleToggleField,
        enabled: bool,
    ) -> Result<(), DomainError> {
        if let Err(e) = self.api.toggle_rule(id, field, enabled).await {
            error!(rule_id = id, error = %e, "Failed to update firewall rule");
            self.notifier
                .notify(NotificationLevel::Error, &format!("Failed to update rule: {}", e));
            return Err(e);
        }

        info!(rule_id = id, ?field, enabled, "Firewall rule updated");
        Ok(())
    }
}
