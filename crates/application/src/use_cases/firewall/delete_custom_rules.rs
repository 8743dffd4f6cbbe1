use seer_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::ports::{FirewallApiPort, NotificationLevel, NotifierPort};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomRuleDeletion {
    pub deleted: Vec<i64>,
    pub failed: Vec<(i64, DomainError)>,
}

impl CustomRuleDeletion {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct DeleteCustomRulesUseCase {
    api: Arc<dyn FirewallApiPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl DeleteCustomRulesUseCase {
    pub fn new(api: Arc<dyn FirewallApiPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { api, notifier }
    }

    /// Deletes every id in turn; one failure does not stop the rest.
    #[instrument(skip(self))]
    pub async fn execute(&self, ids: &[i64]) -> Result<CustomRuleDeletion, DomainError> {
        if ids.is_empty() {
            return Err(DomainError::InvalidCustomRule(
                "No rules selected".to_string(),
            ));
        }

        let mut outcome = CustomRuleDeletion::default();

        for &id in ids {
            match self.api.delete_custom_rule(id).await {
                Ok(()) => outcome.deleted.push(id),
                Err(e) => {
                    error!(rule_id = id, error = %e, "Failed to delete custom rule");
                    outcome.failed.push((id, e));
                }
            }
        }

        info!(
            deleted = outcome.deleted.len(),
            failed = outcome.failed.len(),
            "Custom rule deletion completed"
        );

        if outcome.all_succeeded() {
            self.notifier.notify(
                NotificationLevel::Success,
                &format!("Deleted {} rule(s)", outcome.deleted.len()),
            );
        } else {
            self.notifier.notify(
                NotificationLevel::Warning,
                &format!("{} rule(s) could not be deleted", outcome.failed.len()),
            );
        }

        Ok(outcome)
    }
}
