use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FirewallApiConfig {
    /// Explicit base URL. When unset the URL is derived from `host`.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FirewallApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            host: default_host(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FirewallApiConfig {
    /// Loopback hosts (and an empty host) map to `localhost`; anything else
    /// is used as-is.
    pub fn resolve_base_url(&self) -> String {
        if let Some(url) = self.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return url.trim_end_matches('/').to_string();
        }

        let host = self.host.trim();
        if host.is_empty() || host == "localhost" || host == "127.0.0.1" {
            format!("http://localhost:{}", self.port)
        } else {
            format!("http://{}:{}", host, self.port)
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_timeout_secs() -> u64 {
    5
}
