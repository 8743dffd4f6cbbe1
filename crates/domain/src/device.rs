use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaseType {
    Static,
    Dynamic,
}

impl LeaseType {
    pub fn to_str(&self) -> &'static str {
        match self {
            LeaseType::Static => "Static",
            LeaseType::Dynamic => "Dynamic",
        }
    }
}

/// DHCP lease as reported by the router flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DhcpLease {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "static")]
    pub static_lease: Option<bool>,
    #[serde(default)]
    pub lease_time: Option<u64>,
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
}

impl DhcpLease {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("active")
    }

    pub fn interface(&self) -> &str {
        self.interface.as_deref().unwrap_or("eth0")
    }

    pub fn device_type(&self) -> &str {
        self.device_type.as_deref().unwrap_or("Unknown")
    }

    pub fn lease_type(&self) -> LeaseType {
        if self.static_lease.unwrap_or(false) {
            LeaseType::Static
        } else {
            LeaseType::Dynamic
        }
    }

    pub fn normalized_mac(&self) -> Option<String> {
        self.mac.as_deref().map(normalize_mac)
    }
}

/// Renders a lease duration as `"{d}d {h}h {m}m"`, `"N/A"` when unknown.
pub fn format_lease_time(seconds: Option<u64>) -> String {
    match seconds {
        None | Some(0) => "N/A".to_string(),
        Some(secs) => {
            let days = secs / 86_400;
            let hours = (secs % 86_400) / 3_600;
            let minutes = (secs % 3_600) / 60;
            format!("{}d {}h {}m", days, hours, minutes)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedDevice {
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub ip: Option<String>,
}

impl BlockedDevice {
    pub fn normalized_mac(&self) -> String {
        normalize_mac(&self.mac)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnblockResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub mac: Option<String>,
}

/// Lowercase, colon-separated form used for every MAC comparison.
pub fn normalize_mac(mac: &str) -> String {
    mac.trim().to_ascii_lowercase().replace('-', ":")
}
