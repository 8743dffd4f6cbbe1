#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use chrono::NaiveTime;
use seer_application::ports::{
    BridgePort, ClockPort, FirewallApiPort, NotificationLevel, NotifierPort, TelemetryCachePort,
};
use seer_domain::{
    CpuHistory, CustomRule, DomainError, FirewallRule, NewCustomRule, OutboundMessage,
    PolicyCommand, PolicyRecord, RuleToggleField,
};
use serde_json::json;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn record(destination: &str, start: &str, end: &str, enabled: bool) -> PolicyRecord {
    serde_json::from_value(json!({
        "policy": format!("Block {}", destination),
        "source": "*",
        "destination": destination,
        "schedule": { "start": start, "end": end },
        "enabled": enabled,
    }))
    .unwrap()
}

#[derive(Clone, Default)]
pub struct MockBridge {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    should_fail: Arc<AtomicBool>,
    failing_destinations: Arc<RwLock<HashSet<String>>>,
    not_ready: Arc<AtomicBool>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let bridge = Self::new();
        bridge.set_should_fail(true);
        bridge
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn fail_for(&self, destination: &str) {
        self.failing_destinations
            .write()
            .unwrap()
            .insert(destination.to_string());
    }

    pub fn set_ready(&self, ready: bool) {
        self.not_ready.store(!ready, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_commands(&self) -> Vec<PolicyCommand> {
        self.sent()
            .iter()
            .filter_map(|m| m.as_policy_command().cloned())
            .collect()
    }

    pub fn sent_topics(&self) -> Vec<&'static str> {
        self.sent().iter().map(|m| m.topic()).collect()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

impl BridgePort for MockBridge {
    fn send(&self, message: OutboundMessage) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::BridgeSendFailed {
                topic: message.topic().to_string(),
                reason: "mock failure".to_string(),
            });
        }

        if let Some(command) = message.as_policy_command() {
            if self
                .failing_destinations
                .read()
                .unwrap()
                .contains(command.destination.as_ref())
            {
                return Err(DomainError::BridgeSendFailed {
                    topic: message.topic().to_string(),
                    reason: format!("mock failure for {}", command.destination),
                });
            }
        }

        self.sent.lock().unwrap().push(message);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        !self.not_ready.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
pub struct MockClock {
    now: Arc<RwLock<NaiveTime>>,
}

impl MockClock {
    pub fn at(hour: u32, minute: u32) -> Self {
        Self {
            now: Arc::new(RwLock::new(at(hour, minute))),
        }
    }

    pub fn set(&self, hour: u32, minute: u32) {
        *self.now.write().unwrap() = at(hour, minute);
    }
}

impl ClockPort for MockClock {
    fn now(&self) -> NaiveTime {
        *self.now.read().unwrap()
    }
}

#[derive(Clone, Default)]
pub struct MockNotifier {
    notifications: Arc<Mutex<Vec<(NotificationLevel, String)>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<(NotificationLevel, String)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.notifications()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    pub fn last(&self) -> Option<(NotificationLevel, String)> {
        self.notifications.lock().unwrap().last().cloned()
    }
}

impl NotifierPort for MockNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

#[derive(Clone, Default)]
pub struct MockFirewallApi {
    rules: Arc<RwLock<Vec<FirewallRule>>>,
    custom_rules: Arc<RwLock<Vec<CustomRule>>>,
    created: Arc<RwLock<Vec<NewCustomRule>>>,
    toggles: Arc<RwLock<Vec<(i64, RuleToggleField, bool)>>>,
    failing_ids: Arc<RwLock<HashSet<i64>>>,
    should_timeout: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl MockFirewallApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom_rules(rules: Vec<CustomRule>) -> Self {
        let api = Self::new();
        *api.custom_rules.write().unwrap() = rules;
        api
    }

    pub fn with_rules(rules: Vec<FirewallRule>) -> Self {
        let api = Self::new();
        *api.rules.write().unwrap() = rules;
        api
    }

    pub fn fail_for(&self, id: i64) {
        self.failing_ids.write().unwrap().insert(id);
    }

    pub fn set_should_timeout(&self, should_timeout: bool) {
        self.should_timeout.store(should_timeout, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<NewCustomRule> {
        self.created.read().unwrap().clone()
    }

    pub fn toggles(&self) -> Vec<(i64, RuleToggleField, bool)> {
        self.toggles.read().unwrap().clone()
    }

    pub fn custom_rule_ids(&self) -> Vec<i64> {
        self.custom_rules.read().unwrap().iter().map(|r| r.id).collect()
    }

    fn begin(&self, id: Option<i64>) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_timeout.load(Ordering::SeqCst) {
            return Err(DomainError::FirewallApiTimeout { timeout_secs: 5 });
        }
        if let Some(id) = id {
            if self.failing_ids.read().unwrap().contains(&id) {
                return Err(DomainError::FirewallApi(format!("rule {} rejected", id)));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl FirewallApiPort for MockFirewallApi {
    async fn list_rules(&self) -> Result<Vec<FirewallRule>, DomainError> {
        self.begin(None)?;
        Ok(self.rules.read().unwrap().clone())
    }

    async fn toggle_rule(
        &self,
        id: i64,
        field: RuleToggleField,
        enabled: bool,
    ) -> Result<(), DomainError> {
        self.begin(Some(id))?;
        self.toggles.write().unwrap().push((id, field, enabled));
        Ok(())
    }

    async fn list_custom_rules(&self) -> Result<Vec<CustomRule>, DomainError> {
        self.begin(None)?;
        Ok(self.custom_rules.read().unwrap().clone())
    }

    async fn create_custom_rule(&self, rule: &NewCustomRule) -> Result<(), DomainError> {
        self.begin(None)?;
        self.created.write().unwrap().push(rule.clone());
        Ok(())
    }

    async fn delete_custom_rule(&self, id: i64) -> Result<(), DomainError> {
        self.begin(Some(id))?;
        self.custom_rules.write().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn toggle_custom_rule(&self, id: i64, enabled: bool) -> Result<(), DomainError> {
        self.begin(Some(id))?;
        let mut rules = self.custom_rules.write().unwrap();
        match rules.iter_mut().find(|r| r.id == id) {
            Some(rule) => {
                rule.enabled = enabled;
                Ok(())
            }
            None => Err(DomainError::FirewallApi(format!("rule {} not found", id))),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockTelemetryCache {
    stored: Arc<RwLock<Option<CpuHistory>>>,
    corrupt: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
}

impl MockTelemetryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: CpuHistory) -> Self {
        let cache = Self::new();
        *cache.stored.write().unwrap() = Some(history);
        cache
    }

    pub fn corrupt() -> Self {
        let cache = Self::new();
        cache.corrupt.store(true, Ordering::SeqCst);
        cache
    }

    pub fn stored(&self) -> Option<CpuHistory> {
        self.stored.read().unwrap().clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TelemetryCachePort for MockTelemetryCache {
    async fn load(&self) -> Result<Option<CpuHistory>, DomainError> {
        if self.corrupt.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("expected value at line 1".to_string()));
        }
        Ok(self.stored())
    }

    async fn save(&self, history: &CpuHistory) -> Result<(), DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.stored.write().unwrap() = Some(history.clone());
        Ok(())
    }
}
