use seer_application::ports::NotificationLevel;
use seer_application::services::FirewallState;
use seer_application::use_cases::firewall::{
    CreateCustomRuleUseCase, DeleteCustomRulesUseCase, GetCustomRulesUseCase,
    GetFirewallRulesUseCase, ManageBlacklistUseCase, ToggleCustomRuleUseCase,
    ToggleFirewallRuleUseCase,
};
use seer_domain::{CustomRule, CustomRuleForm, DomainError, OutboundMessage, RuleToggleField};
use serde_json::json;
use std::sync::Arc;

mod helpers;
use helpers::{MockBridge, MockFirewallApi, MockNotifier};

fn custom_rule(id: i64, name: &str) -> CustomRule {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "port": 8080,
        "protocol": "tcp",
        "enabled": 1,
        "accessFrom": "LAN",
    }))
    .unwrap()
}

fn form(name: &str, port: &str) -> CustomRuleForm {
    CustomRuleForm {
        name: name.to_string(),
        port: port.to_string(),
        protocol: "tcp".to_string(),
        action: "accept".to_string(),
        access_lan: true,
        access_wan: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_list_rules() {
    let api = Arc::new(MockFirewallApi::with_rules(vec![serde_json::from_value(json!({
        "id": 1,
        "policy": "Allow SSH",
        "type": "input",
        "rule_enabled": 1,
        "nat_enabled": "0",
    }))
    .unwrap()]));

    let rules = GetFirewallRulesUseCase::new(api).execute().await.unwrap();

    assert_eq!(rules.len(), 1);
    assert!(rules[0].rule_enabled);
    assert!(!rules[0].nat_enabled);
    assert_eq!(rules[0].rule_type, "input");
}

#[tokio::test]
async fn test_toggle_rule_timeout_is_reported() {
    let api = Arc::new(MockFirewallApi::new());
    api.set_should_timeout(true);
    let notifier = Arc::new(MockNotifier::new());

    let result = ToggleFirewallRuleUseCase::new(api, notifier.clone())
        .execute(3, RuleToggleField::NatEnabled, true)
        .await;

    assert_eq!(result, Err(DomainError::FirewallApiTimeout { timeout_secs: 5 }));
    assert_eq!(notifier.count(NotificationLevel::Error), 1);
}

#[tokio::test]
async fn test_toggle_rule_forwards_field() {
    let api = Arc::new(MockFirewallApi::new());

    ToggleFirewallRuleUseCase::new(api.clone(), Arc::new(MockNotifier::new()))
        .execute(7, RuleToggleField::RuleEnabled, false)
        .await
        .unwrap();

    assert_eq!(api.toggles(), vec![(7, RuleToggleField::RuleEnabled, false)]);
}

#[tokio::test]
async fn test_create_custom_rule_builds_access_from() {
    let api = Arc::new(MockFirewallApi::new());
    let notifier = Arc::new(MockNotifier::new());

    let rule = CreateCustomRuleUseCase::new(api.clone(), notifier.clone())
        .execute(form("Plex", " 32400 "))
        .await
        .unwrap();

    assert_eq!(rule.port, "32400");
    assert_eq!(rule.access_from, "LAN + WAN");
    assert_eq!(api.created(), vec![rule]);
    assert_eq!(notifier.count(NotificationLevel::Success), 1);
}

#[tokio::test]
async fn test_create_custom_rule_validates_before_network() {
    let api = Arc::new(MockFirewallApi::new());
    let use_case = CreateCustomRuleUseCase::new(api.clone(), Arc::new(MockNotifier::new()));

    let no_name = use_case.execute(form("  ", "80")).await;
    let bad_port = use_case.execute(form("Web", "70000")).await;
    let zero_port = use_case.execute(form("Web", "0")).await;
    let mut no_access = form("Web", "80");
    no_access.access_lan = false;
    no_access.access_wan = false;
    let no_access = use_case.execute(no_access).await;

    for result in [no_name, bad_port, zero_port, no_access] {
        assert!(matches!(result, Err(DomainError::InvalidCustomRule(_))));
    }
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_bulk_delete_reports_per_rule_failures() {
    let api = Arc::new(MockFirewallApi::with_custom_rules(vec![
        custom_rule(1, "a"),
        custom_rule(2, "b"),
        custom_rule(3, "c"),
    ]));
    api.fail_for(2);
    let notifier = Arc::new(MockNotifier::new());

    let outcome = DeleteCustomRulesUseCase::new(api.clone(), notifier.clone())
        .execute(&[1, 2, 3])
        .await
        .unwrap();

    assert!(!outcome.all_succeeded());
    assert_eq!(outcome.deleted, vec![1, 3]);
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].0, 2);
    assert_eq!(api.custom_rule_ids(), vec![2]);
    assert_eq!(notifier.count(NotificationLevel::Warning), 1);
}

#[tokio::test]
async fn test_bulk_delete_requires_selection() {
    let api = Arc::new(MockFirewallApi::new());

    let result = DeleteCustomRulesUseCase::new(api.clone(), Arc::new(MockNotifier::new()))
        .execute(&[])
        .await;

    assert!(result.is_err());
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_toggle_custom_rule() {
    let api = Arc::new(MockFirewallApi::with_custom_rules(vec![custom_rule(4, "ssh")]));

    ToggleCustomRuleUseCase::new(api.clone(), Arc::new(MockNotifier::new()))
        .execute(4, false)
        .await
        .unwrap();

    let rules = GetCustomRulesUseCase::new(api).execute().await.unwrap();
    assert!(!rules[0].enabled);
    assert_eq!(rules[0].port.as_deref(), Some("8080"));
}

#[tokio::test]
async fn test_blacklist_add_validates_ip() {
    let bridge = Arc::new(MockBridge::new());
    let use_case = ManageBlacklistUseCase::new(FirewallState::shared(), bridge.clone());

    assert!(matches!(
        use_case.add("300.1.1.1"),
        Err(DomainError::InvalidIpAddress(_))
    ));
    assert!(use_case.add("").is_err());
    use_case.add(" 203.0.113.9 ").unwrap();
    use_case.add("2001:db8::1").unwrap();

    assert_eq!(
        bridge.sent(),
        vec![
            OutboundMessage::AddBlacklist {
                ip: "203.0.113.9".to_string()
            },
            OutboundMessage::AddBlacklist {
                ip: "2001:db8::1".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_blacklist_remove_status_and_reload() {
    let bridge = Arc::new(MockBridge::new());
    let use_case = ManageBlacklistUseCase::new(FirewallState::shared(), bridge.clone());

    use_case.remove("203.0.113.9").unwrap();
    use_case.request_status().unwrap();
    use_case.reload().unwrap();

    assert_eq!(
        bridge.sent_topics(),
        vec!["removeBlacklist", "getFirewallStatus", "reloadFirewall"]
    );
}
