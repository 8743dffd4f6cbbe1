use seer_application::use_cases::EvaluatePoliciesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, sleep, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const DEFAULT_INITIAL_DELAY_MS: u64 = 1500;
const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Recurring schedule evaluator. One pass fires shortly after start, then
/// every `interval` counted from start.
pub struct PolicyScheduleJob {
    evaluate: Arc<EvaluatePoliciesUseCase>,
    initial_delay: Duration,
    interval: Duration,
    shutdown: CancellationToken,
}

impl PolicyScheduleJob {
    pub fn new(evaluate: Arc<EvaluatePoliciesUseCase>) -> Self {
        Self {
            evaluate,
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
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
            initial_delay_ms = self.initial_delay.as_millis() as u64,
            interval_secs = self.interval.as_secs(),
            "Starting policy schedule job"
        );

        tokio::spawn(async move {
            let first_pass = sleep(self.initial_delay);
            tokio::pin!(first_pass);
            let mut first_pass_done = false;
            let mut ticker = interval_at(Instant::now() + self.interval, self.interval);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("PolicyScheduleJob: shutting down");
                        break;
                    }
                    _ = &mut first_pass, if !first_pass_done => {
                        first_pass_done = true;
                        debug!("Running initial policy schedule pass");
                        self.evaluate.execute().await;
                    }
                    _ = ticker.tick() => {
                        self.evaluate.execute().await;
                    }
                }
            }
        });
    }
}
