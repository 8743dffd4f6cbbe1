use crate::{FirewallStatusJob, InitialSyncJob, PolicyScheduleJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(InitialSyncJob);
impl_spawnable_job!(PolicyScheduleJob);
impl_spawnable_job!(FirewallStatusJob);

fn spawn_job<J: SpawnableJob>(job: Option<J>, shutdown: &Option<CancellationToken>) {
    if let Some(job) = job {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        Arc::new(job).start_job();
    }
}

pub struct JobRunner {
    initial_sync: Option<InitialSyncJob>,
    policy_schedule: Option<PolicyScheduleJob>,
    firewall_status: Option<FirewallStatusJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            initial_sync: None,
            policy_schedule: None,
            firewall_status: None,
            shutdown: None,
        }
    }

    pub fn with_initial_sync(mut self, job: InitialSyncJob) -> Self {
        self.initial_sync = Some(job);
        self
    }

    pub fn with_policy_schedule(mut self, job: PolicyScheduleJob) -> Self {
        self.policy_schedule = Some(job);
        self
    }

    pub fn with_firewall_status(mut self, job: FirewallStatusJob) -> Self {
        self.firewall_status = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        spawn_job(self.initial_sync, &self.shutdown);
        spawn_job(self.policy_schedule, &self.shutdown);
        spawn_job(self.firewall_status, &self.shutdown);

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
