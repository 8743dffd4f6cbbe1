mod create_custom_rule;
mod delete_custom_rules;
mod get_custom_rules;
mod get_firewall_rules;
mod manage_blacklist;
mod toggle_custom_rule;
mod toggle_firewall_rule;

pub use create_custom_rule::CreateCustomRuleUseCase;
pub use delete_custom_rules::{CustomRuleDeletion, DeleteCustomRulesUseCase};
pub use get_custom_rules::GetCustomRulesUseCase;
pub use get_firewall_rules::GetFirewallRulesUseCase;
pub use manage_blacklist::ManageBlacklistUseCase;
pub use toggle_custom_rule::ToggleCustomRuleUseCase;
pub use toggle_firewall_rule::ToggleFirewallRuleUseCase;
