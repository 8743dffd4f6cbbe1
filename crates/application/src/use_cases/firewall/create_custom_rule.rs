use seer_domain::{CustomRuleForm, DomainError, NewCustomRule};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{FirewallApiPort, NotificationLevel, NotifierPort};

pub struct CreateCustomRuleUseCase {
    api: Arc<dyn FirewallApiPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl CreateCustomRuleUseCase {
    pub fn new(api: Arc<dyn FirewallApiPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { api, notifier }
    }

    /// The form is validated before anything is sent to the API.
    #[instrument(skip(self, form), fields(name = %form.name, port = %form.port))]
    pub async fn execute(&self, form: CustomRuleForm) -> Result<NewCustomRule, DomainError> {
        let rule = match form.validate() {
            Ok(rule) => rule,
            Err(e) => {
                self.notifier.notify(NotificationLevel::Warning, &e.to_string());
                return Err(e);
            }
        };

        if let Err(e) = self.api.create_custom_rule(&rule).await {
            self.notifier
                .notify(NotificationLevel::Error, &format!("Failed to create rule: {}", e));
            return Err(e);
        }

        info!(
            name = %rule.name,
            port = %rule.port,
            access_from = %rule.access_from,
            "Custom rule created"
        );
        self.notifier
            .notify(NotificationLevel::Success, "Custom rule created successfully");

        Ok(rule)
    }
}
