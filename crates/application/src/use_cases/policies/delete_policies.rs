use seer_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{BridgePort, NotificationLevel, NotifierPort};
use crate::services::{DeletionOutcome, SharedPolicyStore};

pub struct DeletePoliciesUseCase {
    store: SharedPolicyStore,
    bridge: Arc<dyn BridgePort>,
    notifier: Arc<dyn NotifierPort>,
}

impl DeletePoliciesUseCase {
    pub fn new(
        store: SharedPolicyStore,
        bridge: Arc<dyn BridgePort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            store,
            bridge,
            notifier,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute_selected(&self) -> Result<DeletionOutcome, DomainError> {
        let result = self
            .store
            .lock()
            .await
            .delete_selected(self.bridge.as_ref());
        self.report(result)
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, destinations: &[&str]) -> Result<DeletionOutcome, DomainError> {
        let result = self
            .store
            .lock()
            .await
            .delete(destinations, self.bridge.as_ref());
        self.report(result)
    }

    fn report(
        &self,
        result: Result<DeletionOutcome, DomainError>,
    ) -> Result<DeletionOutcome, DomainError> {
        match &result {
            Ok(outcome) => {
                info!(
                    requested = outcome.requested,
                    failed = outcome.failed,
                    "Policy deletion requested"
                );
                if outcome.failed > 0 {
                    self.notifier.notify(
                        NotificationLevel::Warning,
                        &format!("{} policy deletion(s) could not be sent", outcome.failed),
                    );
                }
            }
            Err(DomainError::NoPoliciesSelected) => {
                self.notifier.notify(
                    NotificationLevel::Warning,
                    "Please select one or more policies to delete.",
                );
            }
            Err(_) => {}
        }
        result
    }
}
