use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::net::IpAddr;

use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub id: i64,
    #[serde(default)]
    pub policy: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default, rename = "type")]
    pub rule_type: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub action: String,
    #[serde(default, deserialize_with = "flag")]
    pub nat_enabled: bool,
    #[serde(default, deserialize_with = "flag")]
    pub rule_enabled: bool,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub usage: Option<String>,
}

/// Column flipped by `POST /api/rules/{id}/toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleToggleField {
    RuleEnabled,
    NatEnabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRule {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub port: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub enabled: bool,
    #[serde(default, alias = "accessFrom")]
    pub access_from: Option<String>,
    #[serde(default, alias = "accessLan", deserialize_with = "flag")]
    pub access_lan: bool,
    #[serde(default, alias = "accessTailnet", deserialize_with = "flag")]
    pub access_tailnet: bool,
    #[serde(default, alias = "accessWan", deserialize_with = "flag")]
    pub access_wan: bool,
}

impl CustomRule {
    pub fn title(&self) -> &str {
        self.name
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("")
    }

    pub fn access_display(&self) -> String {
        match self.access_from.as_deref() {
            Some(access) if !access.is_empty() => access.to_string(),
            _ => access_from(self.access_lan, self.access_tailnet, self.access_wan),
        }
    }
}

/// Raw operator input for a new custom rule, before validation.
#[derive(Debug, Clone, Default)]
pub struct CustomRuleForm {
    pub name: String,
    pub description: String,
    pub port: String,
    pub protocol: String,
    pub usage: String,
    pub action: String,
    pub access_lan: bool,
    pub access_tailnet: bool,
    pub access_wan: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomRule {
    pub name: String,
    pub description: String,
    pub port: String,
    pub protocol: String,
    pub usage: String,
    pub action: String,
    pub access_from: String,
    pub access_lan: bool,
    pub access_tailnet: bool,
    pub access_wan: bool,
}

impl CustomRuleForm {
    pub fn validate(self) -> Result<NewCustomRule, DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidCustomRule(
                "Please enter a service name".to_string(),
            ));
        }

        let port = self.port.trim();
        if port.is_empty() {
            return Err(DomainError::InvalidCustomRule(
                "Please enter a port number".to_string(),
            ));
        }
        let port_num: u16 = port
            .parse()
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| {
                DomainError::InvalidCustomRule(
                    "Port must be a number between 1 and 65535".to_string(),
                )
            })?;

        if !self.access_lan && !self.access_tailnet && !self.access_wan {
            return Err(DomainError::InvalidCustomRule(
                "Please select at least one access source".to_string(),
            ));
        }

        Ok(NewCustomRule {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            port: port_num.to_string(),
            protocol: self.protocol,
            usage: self.usage,
            action: self.action,
            access_from: access_from(self.access_lan, self.access_tailnet, self.access_wan),
            access_lan: self.access_lan,
            access_tailnet: self.access_tailnet,
            access_wan: self.access_wan,
        })
    }
}

fn access_from(lan: bool, tailnet: bool, wan: bool) -> String {
    [(lan, "LAN"), (tailnet, "Tailscale"), (wan, "WAN")]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, label)| *label)
        .collect::<Vec<_>>()
        .join(" + ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    pub ip: String,
    #[serde(default)]
    pub added: Option<String>,
}

impl BlacklistEntry {
    pub fn ip_family(&self) -> &'static str {
        if self.ip.contains(':') {
            "IPv6"
        } else {
            "IPv4"
        }
    }
}

/// Inbound `firewallStatus` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallStatus {
    #[serde(default)]
    pub blacklist: Option<Vec<BlacklistEntry>>,
    #[serde(default)]
    pub rate_limited: Option<u64>,
}

pub fn validate_ip(ip: &str) -> Result<IpAddr, DomainError> {
    let trimmed = ip.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidIpAddress(
            "Please enter an IP address".to_string(),
        ));
    }
    trimmed
        .parse::<IpAddr>()
        .map_err(|_| DomainError::InvalidIpAddress(trimmed.to_string()))
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        Value::String(s) => matches!(s.as_str(), "1" | "true" | "yes" | "Yes"),
        _ => false,
    })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
