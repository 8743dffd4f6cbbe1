use async_trait::async_trait;
use seer_domain::{CpuHistory, DomainError};

#[async_trait]
pub trait TelemetryCachePort: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<CpuHistory>, DomainError>;

    async fn save(&self, history: &CpuHistory) -> Result<(), DomainError>;
}
