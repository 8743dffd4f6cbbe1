use chrono::NaiveTime;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{BridgePort, ClockPort};
use crate::services::{EvaluationOutcome, SharedPolicyStore};

pub struct EvaluatePoliciesUseCase {
    store: SharedPolicyStore,
    bridge: Arc<dyn BridgePort>,
    clock: Arc<dyn ClockPort>,
}

impl EvaluatePoliciesUseCase {
    pub fn new(
        store: SharedPolicyStore,
        bridge: Arc<dyn BridgePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            store,
            bridge,
            clock,
        }
    }

    pub async fn execute(&self) -> EvaluationOutcome {
        self.execute_at(self.clock.now()).await
    }

    #[instrument(skip(self))]
    pub async fn execute_at(&self, now: NaiveTime) -> EvaluationOutcome {
        let outcome = self.store.lock().await.evaluate(now, self.bridge.as_ref());

        if outcome.commands_sent() > 0 || outcome.failed > 0 {
            info!(
                evaluated = outcome.evaluated,
                blocked = outcome.blocked,
                unblocked = outcome.unblocked,
                failed = outcome.failed,
                "Policy schedule pass completed"
            );
        }

        outcome
    }
}
