use async_trait::async_trait;
use seer_domain::{CustomRule, DomainError, FirewallRule, NewCustomRule, RuleToggleField};

#[async_trait]
pub trait FirewallApiPort: Send + Sync {
    async fn list_rules(&self) -> Result<Vec<FirewallRule>, DomainError>;

    async fn toggle_rule(
        &self,
        id: i64,
        field: RuleToggleField,
        enabled: bool,
    ) -> Result<(), DomainError>;

    async fn list_custom_rules(&self) -> Result<Vec<CustomRule>, DomainError>;

    async fn create_custom_rule(&self, rule: &NewCustomRule) -> Result<(), DomainError>;

    async fn delete_custom_rule(&self, id: i64) -> Result<(), DomainError>;

    async fn toggle_custom_rule(&self, id: i64, enabled: bool) -> Result<(), DomainError>;
}
