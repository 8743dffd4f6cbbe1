use chrono::NaiveTime;
use seer_domain::{
    DomainError, Policy, PolicyAction, PolicyActionResult, PolicyCommand, PolicyRecord, Schedule,
    StatusFilter, SyncState,
};
use serde_json::json;
use std::sync::Arc;

fn record(value: serde_json::Value) -> PolicyRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_record_with_full_fields() {
    let policy = Policy::from_record(record(json!({
        "policy": "No socials",
        "source": "192.168.1.0/24",
        "destination": "example.com",
        "schedule": { "start": "08:00", "end": "18:00" },
        "enabled": true,
    })));

    assert_eq!(&*policy.destination, "example.com");
    assert_eq!(&*policy.name, "No socials");
    assert_eq!(&*policy.source, "192.168.1.0/24");
    assert_eq!(policy.schedule, Schedule::new("08:00", "18:00"));
    assert!(policy.enabled);
    assert!(policy.applied);
    assert!(!policy.selected);
    assert_eq!(policy.sync, SyncState::Confirmed);
}

#[test]
fn test_record_destination_falls_back_to_domain_then_website() {
    let from_domain = Policy::from_record(record(json!({ "domain": "a.com" })));
    assert_eq!(&*from_domain.destination, "a.com");

    let from_website = Policy::from_record(record(json!({
        "destination": "",
        "website": "b.com",
    })));
    assert_eq!(&*from_website.destination, "b.com");

    let missing = Policy::from_record(record(json!({ "policy": "nothing" })));
    assert!(!missing.has_destination());
}

#[test]
fn test_record_defaults() {
    let policy = Policy::from_record(record(json!({ "destination": "example.com" })));

    assert_eq!(&*policy.name, "Block example.com");
    assert_eq!(&*policy.source, "*");
    assert_eq!(policy.schedule, Schedule::all_day());
    assert!(policy.enabled);
}

#[test]
fn test_only_explicit_false_disables() {
    let disabled = record(json!({ "destination": "x.com", "enabled": false }));
    let missing = record(json!({ "destination": "x.com" }));
    let null = record(json!({ "destination": "x.com", "enabled": null }));
    let string = record(json!({ "destination": "x.com", "enabled": "false" }));

    assert!(!disabled.is_enabled());
    assert!(missing.is_enabled());
    assert!(null.is_enabled());
    assert!(string.is_enabled());
}

#[test]
fn test_record_schedule_as_display_string() {
    let rec = record(json!({ "destination": "x.com", "schedule": "22:00 to 06:00" }));
    assert_eq!(rec.schedule(), Schedule::new("22:00", "06:00"));

    let odd = record(json!({ "destination": "x.com", "schedule": 42 }));
    assert_eq!(odd.schedule(), Schedule::all_day());
}

#[test]
fn test_should_be_applied() {
    let mut policy = Policy::new("example.com", Schedule::new("09:00", "17:00"), true);
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let night = NaiveTime::from_hms_opt(20, 0, 0).unwrap();

    assert!(policy.should_be_applied(noon));
    assert!(!policy.should_be_applied(night));

    policy.enabled = false;
    assert!(!policy.should_be_applied(noon));
}

#[test]
fn test_clean_destination() {
    assert_eq!(
        Policy::clean_destination("  https://example.com/ ").unwrap(),
        "example.com"
    );
    assert_eq!(
        Policy::clean_destination("http://example.com").unwrap(),
        "example.com"
    );
    assert_eq!(
        Policy::clean_destination("192.168.1.50").unwrap(),
        "192.168.1.50"
    );
}

#[test]
fn test_clean_destination_rejects_bad_input() {
    assert!(matches!(
        Policy::clean_destination("   "),
        Err(DomainError::InvalidDestination(_))
    ));
    assert!(matches!(
        Policy::clean_destination("https://"),
        Err(DomainError::InvalidDestination(_))
    ));
    assert!(matches!(
        Policy::clean_destination("bad domain.com"),
        Err(DomainError::InvalidDestination(_))
    ));
    assert!(Policy::clean_destination(&"a".repeat(254)).is_err());
}

#[test]
fn test_search_and_status_filters() {
    let mut policy = Policy::new("YouTube.com", Schedule::all_day(), false);
    policy.source = Arc::from("10.0.0.5");

    assert!(policy.matches_search(""));
    assert!(policy.matches_search("youtube"));
    assert!(policy.matches_search("10.0.0"));
    assert!(policy.matches_search("BLOCK"));
    assert!(!policy.matches_search("netflix"));

    assert!(policy.matches_status(StatusFilter::All));
    assert!(policy.matches_status(StatusFilter::Disabled));
    assert!(!policy.matches_status(StatusFilter::Enabled));
}

#[test]
fn test_destination_match_ignores_case() {
    let policy = Policy::new("Example.com", Schedule::all_day(), true);
    assert!(policy.matches_destination("example.COM"));
}

#[test]
fn test_transition_command_shape() {
    let policy = Policy::new("example.com", Schedule::new("08:00", "18:00"), true);
    let command = PolicyCommand::transition(PolicyAction::Block, &policy);

    assert_eq!(
        serde_json::to_value(&command).unwrap(),
        json!({
            "action": "block",
            "destination": "example.com",
            "website": "example.com",
            "domain": "example.com",
            "schedule": { "start": "08:00", "end": "18:00" },
            "keep_policy": true,
        })
    );
    assert!(command.keeps_policy());
}

#[test]
fn test_remove_command_drops_policy() {
    let destination: Arc<str> = Arc::from("example.com");
    let command = PolicyCommand::remove(&destination);

    assert_eq!(command.action, PolicyAction::Unblock);
    assert!(!command.keeps_policy());
    assert_eq!(
        serde_json::to_value(&command).unwrap(),
        json!({
            "action": "unblock",
            "destination": "example.com",
            "website": "example.com",
            "keep_policy": false,
        })
    );
}

#[test]
fn test_create_command_shape() {
    let command = PolicyCommand::create("example.com", Schedule::new("22:00", "06:00"));
    let value = serde_json::to_value(&command).unwrap();

    assert_eq!(value["action"], "block");
    assert_eq!(value["policy"], "Block example.com");
    assert_eq!(value["source"], "*");
    assert_eq!(value["enabled"], true);
    assert_eq!(value["schedule"]["start"], "22:00");
    assert!(value.get("keep_policy").is_none());
}

#[test]
fn test_action_result_resolution() {
    let result: PolicyActionResult = serde_json::from_value(json!({
        "success": false,
        "message": "iptables failed",
        "website": "example.com",
        "action": "block",
    }))
    .unwrap();

    assert!(result.failed());
    assert_eq!(result.target_destination(), Some("example.com"));
    assert_eq!(result.parsed_action(), Some(PolicyAction::Block));

    let minimal: PolicyActionResult = serde_json::from_value(json!({ "action": "wipe" })).unwrap();
    assert!(!minimal.failed());
    assert_eq!(minimal.target_destination(), None);
    assert_eq!(minimal.parsed_action(), None);
}

#[test]
fn test_action_for_state() {
    assert_eq!(PolicyAction::for_state(true), PolicyAction::Block);
    assert_eq!(PolicyAction::for_state(false), PolicyAction::Unblock);
    assert_eq!(PolicyAction::from_str("unblock"), Some(PolicyAction::Unblock));
}
