//! Bridge envelopes and the typed messages carried inside them.
//!
//! Every frame on the bridge is a `{topic, payload}` JSON object. Inbound
//! frames are decoded into [`InboundMessage`] at the boundary; a payload that
//! does not match its topic's schema is rejected with
//! [`DomainError::MalformedPayload`] and unknown topics become
//! [`InboundMessage::Unhandled`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::device::{BlockedDevice, DhcpLease, UnblockResult};
use crate::firewall::{BlacklistEntry, FirewallStatus};
use crate::policy::{PolicyActionResult, PolicyCommand, PolicyRecord};
use crate::telemetry::TelemetrySample;
use crate::DomainError;

pub mod topics {
    pub const FETCH_POLICIES: &str = "fetch_policies";
    pub const POLICIES: &str = "policies";
    pub const POLICY_ACTION: &str = "policy_action";
    pub const POLICY_ACTION_RESULT: &str = "policy_action_result";
    pub const FETCH_DEVICES: &str = "fetch_devices";
    pub const DEVICES: &str = "devices";
    pub const REMOVE_DEVICES: &str = "remove_devices";
    pub const FETCH_BLOCKED_DEVICES: &str = "fetch_blocked_devices";
    pub const BLOCKED_DEVICES: &str = "blocked_devices";
    pub const BLOCKED_LIST: &str = "blocked_list";
    pub const UNBLOCK_DEVICE: &str = "unblock_device";
    pub const UNBLOCK_RESULT: &str = "unblock_result";
    pub const GET_FIREWALL_STATUS: &str = "getFirewallStatus";
    pub const FIREWALL_STATUS: &str = "firewallStatus";
    pub const ADD_BLACKLIST: &str = "addBlacklist";
    pub const REMOVE_BLACKLIST: &str = "removeBlacklist";
    pub const BLACKLIST_UPDATE: &str = "blacklistUpdate";
    pub const RELOAD_FIREWALL: &str = "reloadFirewall";
    pub const CONFIG_RELOADED: &str = "configReloaded";
    pub const TELEMETRY: &str = "telemetry";
    pub const RESTART: &str = "restart";
    pub const UPDATE: &str = "update";
    pub const LOGOUT: &str = "logout";
    pub const ERROR: &str = "error";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeEnvelope {
    pub topic: String,
    #[serde(default)]
    pub payload: Value,
}

impl BridgeEnvelope {
    pub fn new(topic: impl Into<String>, payload: Value) -> Self {
        Self {
            topic: topic.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    Policies(Vec<PolicyRecord>),
    PolicyActionResult(PolicyActionResult),
    /// Our own outbound request reflected back by the flow.
    Echo { topic: String },
    Devices(Vec<DhcpLease>),
    BlockedDevices(Vec<BlockedDevice>),
    UnblockResult(UnblockResult),
    FirewallStatus(FirewallStatus),
    BlacklistUpdate(Vec<BlacklistEntry>),
    ConfigReloaded,
    Telemetry(TelemetrySample),
    Error { message: Option<String> },
    Unhandled { topic: String, payload: Value },
}

impl InboundMessage {
    pub fn decode(envelope: BridgeEnvelope) -> Result<Self, DomainError> {
        let BridgeEnvelope { topic, payload } = envelope;

        let message = match topic.as_str() {
            topics::POLICIES => InboundMessage::Policies(parse_array(&topic, payload)?),
            topics::POLICY_ACTION_RESULT => {
                InboundMessage::PolicyActionResult(parse_object(&topic, payload)?)
            }
            topics::POLICY_ACTION | topics::FETCH_POLICIES => InboundMessage::Echo { topic },
            topics::DEVICES => InboundMessage::Devices(parse_array(&topic, payload)?),
            topics::BLOCKED_DEVICES | topics::BLOCKED_LIST => {
                InboundMessage::BlockedDevices(parse_array(&topic, payload)?)
            }
            topics::UNBLOCK_RESULT => InboundMessage::UnblockResult(parse_object(&topic, payload)?),
            topics::FIREWALL_STATUS => {
                InboundMessage::FirewallStatus(parse_object(&topic, payload)?)
            }
            topics::BLACKLIST_UPDATE => {
                InboundMessage::BlacklistUpdate(parse_array(&topic, payload)?)
            }
            topics::CONFIG_RELOADED => InboundMessage::ConfigReloaded,
            topics::TELEMETRY => InboundMessage::Telemetry(parse_object(&topic, payload)?),
            topics::ERROR => InboundMessage::Error {
                message: payload
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            _ => InboundMessage::Unhandled { topic, payload },
        };

        Ok(message)
    }
}

fn parse_array<T: DeserializeOwned>(topic: &str, payload: Value) -> Result<Vec<T>, DomainError> {
    if !payload.is_array() {
        return Err(DomainError::malformed(topic, "expected an array payload"));
    }
    serde_json::from_value(payload).map_err(|e| DomainError::malformed(topic, e))
}

fn parse_object<T: DeserializeOwned>(topic: &str, payload: Value) -> Result<T, DomainError> {
    if !payload.is_object() {
        return Err(DomainError::malformed(topic, "expected an object payload"));
    }
    serde_json::from_value(payload).map_err(|e| DomainError::malformed(topic, e))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
    Restart,
    Update,
    Logout,
}

impl SystemAction {
    pub fn to_str(&self) -> &'static str {
        match self {
            SystemAction::Restart => topics::RESTART,
            SystemAction::Update => topics::UPDATE,
            SystemAction::Logout => topics::LOGOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutboundMessage {
    FetchPolicies,
    PolicyAction(PolicyCommand),
    FetchDevices,
    RemoveDevices(Vec<String>),
    FetchBlockedDevices,
    UnblockDevice { mac: String, ip: Option<String> },
    GetFirewallStatus,
    AddBlacklist { ip: String },
    RemoveBlacklist { ip: String },
    ReloadFirewall,
    System(SystemAction),
}

impl OutboundMessage {
    pub fn topic(&self) -> &'static str {
        match self {
            OutboundMessage::FetchPolicies => topics::FETCH_POLICIES,
            OutboundMessage::PolicyAction(_) => topics::POLICY_ACTION,
            OutboundMessage::FetchDevices => topics::FETCH_DEVICES,
            OutboundMessage::RemoveDevices(_) => topics::REMOVE_DEVICES,
            OutboundMessage::FetchBlockedDevices => topics::FETCH_BLOCKED_DEVICES,
            OutboundMessage::UnblockDevice { .. } => topics::UNBLOCK_DEVICE,
            OutboundMessage::GetFirewallStatus => topics::GET_FIREWALL_STATUS,
            OutboundMessage::AddBlacklist { .. } => topics::ADD_BLACKLIST,
            OutboundMessage::RemoveBlacklist { .. } => topics::REMOVE_BLACKLIST,
            OutboundMessage::ReloadFirewall => topics::RELOAD_FIREWALL,
            OutboundMessage::System(action) => action.to_str(),
        }
    }

    pub fn into_envelope(self) -> Result<BridgeEnvelope, DomainError> {
        let topic = self.topic();
        let payload = match self {
            OutboundMessage::FetchPolicies
            | OutboundMessage::FetchDevices
            | OutboundMessage::FetchBlockedDevices => Value::Null,
            OutboundMessage::PolicyAction(command) => {
                serde_json::to_value(command).map_err(|e| DomainError::BridgeSendFailed {
                    topic: topic.to_string(),
                    reason: e.to_string(),
                })?
            }
            OutboundMessage::RemoveDevices(macs) => json!(macs),
            OutboundMessage::UnblockDevice { mac, ip } => json!({ "mac": mac, "ip": ip }),
            OutboundMessage::GetFirewallStatus | OutboundMessage::ReloadFirewall => json!({}),
            OutboundMessage::AddBlacklist { ip } | OutboundMessage::RemoveBlacklist { ip } => {
                json!({ "ip": ip })
            }
            OutboundMessage::System(action) => json!({ "action": action.to_str() }),
        };

        Ok(BridgeEnvelope::new(topic, payload))
    }

    pub fn as_policy_command(&self) -> Option<&PolicyCommand> {
        match self {
            OutboundMessage::PolicyAction(command) => Some(command),
            _ => None,
        }
    }
}
