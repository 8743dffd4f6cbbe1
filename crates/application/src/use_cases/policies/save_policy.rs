use seer_domain::{DomainError, OutboundMessage, Policy, PolicyCommand, Schedule};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::ports::BridgePort;
use crate::services::SharedPolicyStore;

const DEFAULT_RESUBMIT_DELAY: Duration = Duration::from_millis(500);

/// Operator form contents. Empty times fall back to the all-day window.
#[derive(Debug, Clone, Default)]
pub struct PolicyDraft {
    pub website: String,
    pub start: String,
    pub end: String,
}

pub struct SavePolicyUseCase {
    store: SharedPolicyStore,
    bridge: Arc<dyn BridgePort>,
    resubmit_delay: Duration,
}

impl SavePolicyUseCase {
    pub fn new(store: SharedPolicyStore, bridge: Arc<dyn BridgePort>) -> Self {
        Self {
            store,
            bridge,
            resubmit_delay: DEFAULT_RESUBMIT_DELAY,
        }
    }

    pub fn with_resubmit_delay(mut self, delay: Duration) -> Self {
        self.resubmit_delay = delay;
        self
    }

    /// Submits a new policy. Returns the cleaned destination.
    #[instrument(skip(self))]
    pub async fn create(&self, draft: PolicyDraft) -> Result<String, DomainError> {
        let (destination, schedule) = Self::validate(&draft)?;
        self.submit(&destination, schedule)?;
        Ok(destination)
    }

    /// Destinations are immutable, so an edit retracts the old policy for
    /// good and submits the new one after a short delay.
    #[instrument(skip(self))]
    pub async fn edit(&self, existing: &str, draft: PolicyDraft) -> Result<String, DomainError> {
        let (destination, schedule) = Self::validate(&draft)?;

        let old_destination = self
            .store
            .lock()
            .await
            .get(existing)
            .map(|p| p.destination.clone())
            .ok_or_else(|| DomainError::PolicyNotFound(existing.to_string()))?;

        self.bridge.send(OutboundMessage::PolicyAction(PolicyCommand::remove(
            &old_destination,
        )))?;

        tokio::time::sleep(self.resubmit_delay).await;

        self.submit(&destination, schedule)?;
        info!(from = %old_destination, to = %destination, "Policy edited");
        Ok(destination)
    }

    fn validate(draft: &PolicyDraft) -> Result<(String, Schedule), DomainError> {
        let destination = Policy::clean_destination(&draft.website)?;
        let schedule = Schedule::parse_strict(&draft.start, &draft.end)?;
        Ok((destination, schedule))
    }

    fn submit(&self, destination: &str, schedule: Schedule) -> Result<(), DomainError> {
        info!(destination = %destination, schedule = %schedule, "Saving policy");
        self.bridge.send(OutboundMessage::PolicyAction(PolicyCommand::create(
            destination,
            schedule,
        )))
    }
}
