use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use seer_application::ports::FirewallApiPort;
use seer_domain::config::FirewallApiConfig;
use seer_domain::{CustomRule, DomainError, FirewallRule, NewCustomRule, RuleToggleField};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Every endpoint answers `{success, rules?, error?}`.
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct ApiResponse<T> {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    rules: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

/// REST client for the firewall management API.
pub struct HttpFirewallApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpFirewallApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::FirewallApi(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &FirewallApiConfig) -> Result<Self, DomainError> {
        Self::new(
            config.resolve_base_url(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, DomainError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let body: ApiResponse<T> = match response.json().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(DomainError::FirewallApi(format!("HTTP {}", status.as_u16())));
            }
            Err(e) => return Err(self.map_error(e)),
        };

        if !status.is_success() || !body.success {
            return Err(DomainError::FirewallApi(
                body.error
                    .unwrap_or_else(|| format!("Server error (HTTP {})", status.as_u16())),
            ));
        }

        Ok(body)
    }

    async fn call_unit(&self, request: RequestBuilder) -> Result<(), DomainError> {
        self.call::<serde_json::Value>(request).await.map(|_| ())
    }

    fn map_error(&self, error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            DomainError::FirewallApiTimeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else if error.is_connect() {
            DomainError::FirewallApi(format!("Cannot connect to API at {}", self.base_url))
        } else if error.is_decode() {
            DomainError::FirewallApi("Invalid API response format".to_string())
        } else {
            DomainError::FirewallApi(error.to_string())
        }
    }
}

fn toggle_field_name(field: RuleToggleField) -> &'static str {
    match field {
        RuleToggleField::RuleEnabled => "enabled",
        RuleToggleField::NatEnabled => "nat",
    }
}

#[async_trait]
impl FirewallApiPort for HttpFirewallApi {
    async fn list_rules(&self) -> Result<Vec<FirewallRule>, DomainError> {
        let body = self
            .call::<Vec<FirewallRule>>(self.client.get(self.url("/api/rules")))
            .await?;
        let rules = body
            .rules
            .ok_or_else(|| DomainError::FirewallApi("Invalid API response format".to_string()))?;
        debug!(count = rules.len(), "Loaded firewall rules from API");
        Ok(rules)
    }

    async fn toggle_rule(
        &self,
        id: i64,
        field: RuleToggleField,
        enabled: bool,
    ) -> Result<(), DomainError> {
        let request = self
            .client
            .post(self.url(&format!("/api/rules/{}/toggle", id)))
            .json(&json!({ "field": toggle_field_name(field), "value": enabled }));
        self.call_unit(request).await
    }

    async fn list_custom_rules(&self) -> Result<Vec<CustomRule>, DomainError> {
        let body = self
            .call::<Vec<CustomRule>>(self.client.get(self.url("/api/custom-rules")))
            .await?;
        Ok(body.rules.unwrap_or_default())
    }

    async fn create_custom_rule(&self, rule: &NewCustomRule) -> Result<(), DomainError> {
        let request = self.client.post(self.url("/api/custom-rules")).json(rule);
        self.call_unit(request).await
    }

    async fn delete_custom_rule(&self, id: i64) -> Result<(), DomainError> {
        let request = self
            .client
            .delete(self.url(&format!("/api/custom-rules/{}", id)));
        self.call_unit(request).await
    }

    async fn toggle_custom_rule(&self, id: i64, enabled: bool) -> Result<(), DomainError> {
        let request = self
            .client
            .post(self.url(&format!("/api/custom-rules/{}/toggle", id)))
            .json(&json!({ "enabled": enabled }));
        self.call_unit(request).await
    }
}
