use async_trait::async_trait;
use seer_application::ports::TelemetryCachePort;
use seer_domain::{CpuHistory, DomainError};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// CPU history stored as a single JSON document.
pub struct FileTelemetryCache {
    path: PathBuf,
}

impl FileTelemetryCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TelemetryCachePort for FileTelemetryCache {
    async fn load(&self) -> Result<Option<CpuHistory>, DomainError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::CacheError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let history = serde_json::from_str(&contents).map_err(|e| {
            DomainError::CacheError(format!("Corrupt cache {}: {}", self.path.display(), e))
        })?;
        Ok(Some(history))
    }

    async fn save(&self, history: &CpuHistory) -> Result<(), DomainError> {
        let contents = serde_json::to_string(history)
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).await.map_err(|e| {
            DomainError::CacheError(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            DomainError::CacheError(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), samples = history.len(), "CPU history saved");
        Ok(())
    }
}
