use seer_domain::{DomainError, Policy};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::{BridgePort, ClockPort, NotificationLevel, NotifierPort};
use crate::services::SharedPolicyStore;

pub struct TogglePolicyUseCase {
    store: SharedPolicyStore,
    bridge: Arc<dyn BridgePort>,
    clock: Arc<dyn ClockPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl TogglePolicyUseCase {
    pub fn new(
        store: SharedPolicyStore,
        bridge: Arc<dyn BridgePort>,
        clock: Arc<dyn ClockPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            store,
            bridge,
            clock,
            notifier,
        }
    }

    /// Evaluated against the current clock, not the next timer tick.
    #[instrument(skip(self))]
    pub async fn execute(&self, destination: &str) -> Result<Policy, DomainError> {
        let now = self.clock.now();
        let result = self
            .store
            .lock()
            .await
            .toggle(destination, now, self.bridge.as_ref());

        if let Err(DomainError::BridgeSendFailed { .. } | DomainError::BridgeUnavailable) = &result {
            self.notifier.notify(
                NotificationLevel::Error,
                "Failed to toggle policy. Please try again.",
            );
        }

        result
    }
}
