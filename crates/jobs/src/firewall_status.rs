use seer_application::use_cases::ManageBlacklistUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

const DEFAULT_INTERVAL_SECS: u64 = 30;

pub struct FirewallStatusJob {
    firewall: Arc<ManageBlacklistUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl FirewallStatusJob {
    pub fn new(firewall: Arc<ManageBlacklistUseCase>) -> Self {
        Self {
            firewall,
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting firewall status job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("FirewallStatusJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = self.firewall.request_status() {
                            warn!(error = %e, "Failed to request firewall status");
                        }
                    }
                }
            }
        });
    }
}
