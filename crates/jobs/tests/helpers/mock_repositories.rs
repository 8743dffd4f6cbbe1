#![allow(dead_code)]

use chrono::NaiveTime;
use seer_application::ports::{BridgePort, ClockPort};
use seer_application::services::{PolicyStore, SharedPolicyStore};
use seer_domain::{DomainError, OutboundMessage, PolicyAction, PolicyRecord};
use serde_json::json;
use std::sync::{Arc, Mutex, RwLock};

pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn record(destination: &str, start: &str, end: &str, enabled: bool) -> PolicyRecord {
    serde_json::from_value(json!({
        "destination": destination,
        "schedule": { "start": start, "end": end },
        "enabled": enabled,
    }))
    .unwrap()
}

pub fn store_with(records: Vec<PolicyRecord>) -> SharedPolicyStore {
    let mut store = PolicyStore::new();
    store.upsert(records);
    store.into_shared()
}

#[derive(Clone, Default)]
pub struct MockBridge {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topics(&self) -> Vec<&'static str> {
        self.sent.lock().unwrap().iter().map(|m| m.topic()).collect()
    }

    pub fn count_topic(&self, topic: &str) -> usize {
        self.topics().into_iter().filter(|t| *t == topic).count()
    }

    pub fn actions(&self) -> Vec<PolicyAction> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| m.as_policy_command().map(|c| c.action))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl BridgePort for MockBridge {
    fn send(&self, message: OutboundMessage) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}

pub struct MockClock {
    now: RwLock<NaiveTime>,
}

impl MockClock {
    pub fn at(hour: u32, minute: u32) -> Self {
        Self {
            now: RwLock::new(at(hour, minute)),
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
