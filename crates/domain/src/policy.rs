use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::schedule::Schedule;
use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    Block,
    Unblock,
}

impl PolicyAction {
    pub fn to_str(&self) -> &'static str {
        match self {
            PolicyAction::Block => "block",
            PolicyAction::Unblock => "unblock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "block" => Some(PolicyAction::Block),
            "unblock" => Some(PolicyAction::Unblock),
            _ => None,
        }
    }

    pub fn for_state(should_be_applied: bool) -> Self {
        if should_be_applied {
            PolicyAction::Block
        } else {
            PolicyAction::Unblock
        }
    }
}

/// Whether the `applied` flag reflects the backend or a local guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncState {
    /// Set optimistically by the client; a command is in flight.
    Pending,
    /// Taken from a backend snapshot or action result.
    #[default]
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub destination: Arc<str>,
    pub name: Arc<str>,
    pub source: Arc<str>,
    pub schedule: Schedule,
    pub enabled: bool,
    pub applied: bool,
    pub selected: bool,
    pub sync: SyncState,
}

impl Policy {
    pub fn new(destination: &str, schedule: Schedule, enabled: bool) -> Self {
        Self {
            destination: Arc::from(destination),
            name: Arc::from(default_name(destination).as_str()),
            source: Arc::from("*"),
            schedule,
            enabled,
            applied: enabled,
            selected: false,
            sync: SyncState::Confirmed,
        }
    }

    /// Converts a backend record. `applied` starts equal to `enabled`
    /// until the first evaluation pass checks it against the clock.
    pub fn from_record(record: PolicyRecord) -> Self {
        let destination = record.destination().unwrap_or_default();
        let enabled = record.is_enabled();
        let schedule = record.schedule();
        let name = record
            .policy
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| default_name(&destination));
        let source = record
            .source
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "*".to_string());

        Self {
            destination: Arc::from(destination),
            name: Arc::from(name),
            source: Arc::from(source),
            schedule,
            enabled,
            applied: enabled,
            selected: false,
            sync: SyncState::Confirmed,
        }
    }

    pub fn has_destination(&self) -> bool {
        !self.destination.trim().is_empty()
    }

    pub fn should_be_applied(&self, now: NaiveTime) -> bool {
        self.enabled && self.schedule.contains(now)
    }

    pub fn matches_destination(&self, destination: &str) -> bool {
        self.destination.eq_ignore_ascii_case(destination)
    }

    pub fn matches_search(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        let needle = text.to_lowercase();
        [&self.name, &self.source, &self.destination]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches_status(&self, status: StatusFilter) -> bool {
        match status {
            StatusFilter::All => true,
            StatusFilter::Enabled => self.enabled,
            StatusFilter::Disabled => !self.enabled,
        }
    }

    /// Normalizes operator input: trims, drops an `http(s)://` prefix and a
    /// single trailing slash.
    pub fn clean_destination(input: &str) -> Result<String, DomainError> {
        let trimmed = input.trim();
        let without_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);
        let cleaned = without_scheme
            .strip_suffix('/')
            .unwrap_or(without_scheme)
            .trim();

        Self::validate_destination(cleaned)?;
        Ok(cleaned.to_string())
    }

    pub fn validate_destination(destination: &str) -> Result<(), DomainError> {
        if destination.is_empty() {
            return Err(DomainError::InvalidDestination(
                "Destination cannot be empty".to_string(),
            ));
        }
        if destination.len() > 253 {
            return Err(DomainError::InvalidDestination(
                "Destination cannot exceed 253 characters".to_string(),
            ));
        }
        if destination.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidDestination(format!(
                "'{}' contains whitespace",
                destination
            )));
        }
        Ok(())
    }
}

fn default_name(destination: &str) -> String {
    format!("Block {}", destination)
}

/// Policy as pushed by the backend. Field shapes vary between flow
/// versions, so everything is optional and resolved by [`Policy::from_record`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value>,
}

impl PolicyRecord {
    pub fn destination(&self) -> Option<String> {
        [&self.destination, &self.domain, &self.website]
            .into_iter()
            .flatten()
            .find(|d| !d.is_empty())
            .cloned()
    }

    /// Anything other than an explicit `false` counts as enabled.
    pub fn is_enabled(&self) -> bool {
        !matches!(self.enabled, Some(Value::Bool(false)))
    }

    pub fn schedule(&self) -> Schedule {
        match &self.schedule {
            Some(Value::Object(map)) => Schedule::with_defaults(
                map.get("start").and_then(Value::as_str),
                map.get("end").and_then(Value::as_str),
            ),
            Some(Value::String(text)) if !text.is_empty() => Schedule::parse_range(text),
            _ => Schedule::all_day(),
        }
    }
}

/// Payload of an outbound `policy_action` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyCommand {
    pub action: PolicyAction,
    pub destination: Arc<str>,
    pub website: Arc<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_policy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl PolicyCommand {
    /// Schedule-driven or toggle-driven apply/retract; the policy stays listed.
    pub fn transition(action: PolicyAction, policy: &Policy) -> Self {
        Self {
            action,
            destination: policy.destination.clone(),
            website: policy.destination.clone(),
            domain: Some(policy.destination.clone()),
            schedule: Some(policy.schedule.clone()),
            keep_policy: Some(true),
            policy: None,
            source: None,
            enabled: None,
        }
    }

    /// Permanent removal from the backend list.
    pub fn remove(destination: &Arc<str>) -> Self {
        Self {
            action: PolicyAction::Unblock,
            destination: destination.clone(),
            website: destination.clone(),
            domain: None,
            schedule: None,
            keep_policy: Some(false),
            policy: None,
            source: None,
            enabled: None,
        }
    }

    /// New policy submitted from the operator form.
    pub fn create(destination: &str, schedule: Schedule) -> Self {
        let destination: Arc<str> = Arc::from(destination);
        Self {
            action: PolicyAction::Block,
            destination: destination.clone(),
            website: destination.clone(),
            domain: None,
            schedule: Some(schedule),
            keep_policy: None,
            policy: Some(Arc::from(default_name(&destination))),
            source: Some(Arc::from("*")),
            enabled: Some(true),
        }
    }

    pub fn keeps_policy(&self) -> bool {
        self.keep_policy.unwrap_or(true)
    }
}

/// Inbound `policy_action_result` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyActionResult {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub policies: Option<Vec<PolicyRecord>>,
}

impl PolicyActionResult {
    pub fn target_destination(&self) -> Option<&str> {
        [&self.destination, &self.website, &self.domain]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|d| !d.is_empty())
    }

    pub fn parsed_action(&self) -> Option<PolicyAction> {
        self.action.as_deref().and_then(PolicyAction::from_str)
    }

    pub fn failed(&self) -> bool {
        self.success == Some(false)
    }
}
