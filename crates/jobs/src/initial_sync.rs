use seer_application::use_cases::{RefreshDevicesUseCase, RefreshPoliciesUseCase};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_DELAY_MS: u64 = 1000;

/// One-shot request for the policy and lease lists once the bridge has had
/// time to come up.
pub struct InitialSyncJob {
    policies: Arc<RefreshPoliciesUseCase>,
    devices: Arc<RefreshDevicesUseCase>,
    delay: Duration,
    shutdown: CancellationToken,
}

impl InitialSyncJob {
    pub fn new(policies: Arc<RefreshPoliciesUseCase>, devices: Arc<RefreshDevicesUseCase>) -> Self {
        Self {
            policies,
            devices,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        tokio::spawn(async move {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("InitialSyncJob: cancelled before first fetch");
                }
                _ = tokio::time::sleep(self.delay) => {
                    info!("Fetching initial policy and device lists");
                    if let Err(e) = self.policies.execute() {
                        error!(error = %e, "Initial policy fetch failed");
                    }
                    if let Err(e) = self.devices.leases() {
                        error!(error = %e, "Initial device fetch failed");
                    }
                }
            }
        });
    }
}
