use chrono::NaiveTime;
use seer_domain::{
    DomainError, OutboundMessage, Policy, PolicyAction, PolicyActionResult, PolicyCommand,
    PolicyRecord, StatusFilter, SyncState,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::ports::BridgePort;

pub type SharedPolicyStore = Arc<Mutex<PolicyStore>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOutcome {
    pub evaluated: usize,
    pub blocked: usize,
    pub unblocked: usize,
    pub failed: usize,
}

impl EvaluationOutcome {
    pub fn commands_sent(&self) -> usize {
        self.blocked + self.unblocked
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionOutcome {
    pub requested: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub replaced_list: bool,
    pub updated_policy: bool,
}

/// Client-side cache of temporal policies and the evaluator that keeps
/// each policy's `applied` flag in step with its schedule.
///
/// Every mutating method runs to completion while the caller holds the
/// store, so a timer pass and an operator toggle never interleave.
#[derive(Debug, Default)]
pub struct PolicyStore {
    policies: Vec<Policy>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedPolicyStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Seeds the store with policies whose flags are already known.
    pub fn from_policies(policies: Vec<Policy>) -> Self {
        Self { policies }
    }

    pub fn into_shared(self) -> SharedPolicyStore {
        Arc::new(Mutex::new(self))
    }

    pub fn list(&self) -> &[Policy] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn get(&self, destination: &str) -> Option<&Policy> {
        self.policies
            .iter()
            .find(|p| p.matches_destination(destination))
    }

    fn position(&self, destination: &str) -> Result<usize, DomainError> {
        self.policies
            .iter()
            .position(|p| p.matches_destination(destination))
            .ok_or_else(|| DomainError::PolicyNotFound(destination.to_string()))
    }

    /// Replaces the whole list with a backend snapshot, in push order.
    /// Later duplicates of a destination are dropped.
    pub fn upsert(&mut self, records: Vec<PolicyRecord>) {
        let mut policies: Vec<Policy> = Vec::with_capacity(records.len());

        for record in records {
            let policy = Policy::from_record(record);
            if policy.has_destination()
                && policies
                    .iter()
                    .any(|p| p.matches_destination(&policy.destination))
            {
                warn!(destination = %policy.destination, "Duplicate policy in snapshot, ignoring");
                continue;
            }
            policies.push(policy);
        }

        info!(count = policies.len(), "Policy list replaced from backend");
        self.policies = policies;
    }

    pub fn set_selected(&mut self, destination: &str, selected: bool) -> Result<(), DomainError> {
        let idx = self.position(destination)?;
        self.policies[idx].selected = selected;
        Ok(())
    }

    pub fn selected(&self) -> Vec<&Policy> {
        self.policies.iter().filter(|p| p.selected).collect()
    }

    pub fn filter(&self, search: &str, status: StatusFilter) -> Vec<&Policy> {
        self.policies
            .iter()
            .filter(|p| p.matches_search(search) && p.matches_status(status))
            .collect()
    }

    /// One evaluation pass: emits a block or unblock command for every
    /// policy whose `applied` flag disagrees with `enabled && in_window`.
    ///
    /// A policy whose command cannot be sent keeps its previous `applied`
    /// value so the next pass retries it; the remaining policies are still
    /// processed.
    pub fn evaluate(&mut self, now: NaiveTime, bridge: &dyn BridgePort) -> EvaluationOutcome {
        let mut outcome = EvaluationOutcome::default();

        for policy in self.policies.iter_mut() {
            if !policy.has_destination() {
                continue;
            }
            outcome.evaluated += 1;

            let in_window = policy.schedule.contains(now);
            let should_be_applied = policy.enabled && in_window;

            debug!(
                destination = %policy.destination,
                enabled = policy.enabled,
                in_window,
                applied = policy.applied,
                should_be_applied,
                "Evaluating policy schedule"
            );

            if policy.applied == should_be_applied {
                continue;
            }

            let action = PolicyAction::for_state(should_be_applied);
            let command = PolicyCommand::transition(action, policy);

            match bridge.send(OutboundMessage::PolicyAction(command)) {
                Ok(()) => {
                    info!(
                        destination = %policy.destination,
                        action = action.to_str(),
                        "Schedule transition"
                    );
                    policy.applied = should_be_applied;
                    policy.sync = SyncState::Pending;
                    match action {
                        PolicyAction::Block => outcome.blocked += 1,
                        PolicyAction::Unblock => outcome.unblocked += 1,
                    }
                }
                Err(e) => {
                    error!(
                        destination = %policy.destination,
                        action = action.to_str(),
                        error = %e,
                        "Failed to send schedule transition"
                    );
                    outcome.failed += 1;
                }
            }
        }

        outcome
    }

    /// Flips `enabled` and immediately applies or retracts the policy
    /// against `now`. On a synchronous send failure both flags are restored.
    pub fn toggle(
        &mut self,
        destination: &str,
        now: NaiveTime,
        bridge: &dyn BridgePort,
    ) -> Result<Policy, DomainError> {
        let idx = self.position(destination)?;
        let policy = &mut self.policies[idx];

        let previous = (policy.enabled, policy.applied, policy.sync);

        policy.enabled = !policy.enabled;
        let should_be_applied = policy.should_be_applied(now);
        let action = PolicyAction::for_state(should_be_applied);
        policy.applied = should_be_applied;
        policy.sync = SyncState::Pending;

        let command = PolicyCommand::transition(action, policy);
        if let Err(e) = bridge.send(OutboundMessage::PolicyAction(command)) {
            (policy.enabled, policy.applied, policy.sync) = previous;
            error!(
                destination = %policy.destination,
                error = %e,
                "Toggle failed, restored previous state"
            );
            return Err(e);
        }

        info!(
            destination = %policy.destination,
            enabled = policy.enabled,
            action = action.to_str(),
            "Policy toggled"
        );

        Ok(policy.clone())
    }

    /// Permanently removes every selected policy on the backend, then
    /// clears the selection on the whole list whatever the send outcome.
    pub fn delete_selected(&mut self, bridge: &dyn BridgePort) -> Result<DeletionOutcome, DomainError> {
        let targets: Vec<Arc<str>> = self
            .policies
            .iter()
            .filter(|p| p.selected)
            .map(|p| p.destination.clone())
            .collect();

        if targets.is_empty() {
            return Err(DomainError::NoPoliciesSelected);
        }

        let mut outcome = DeletionOutcome {
            requested: targets.len(),
            failed: 0,
        };

        for destination in &targets {
            info!(destination = %destination, "Deleting policy");
            let command = PolicyCommand::remove(destination);
            if let Err(e) = bridge.send(OutboundMessage::PolicyAction(command)) {
                error!(destination = %destination, error = %e, "Failed to send policy deletion");
                outcome.failed += 1;
            }
        }

        for policy in self.policies.iter_mut() {
            policy.selected = false;
        }

        Ok(outcome)
    }

    /// Selects exactly the given destinations and deletes them.
    pub fn delete(
        &mut self,
        destinations: &[&str],
        bridge: &dyn BridgePort,
    ) -> Result<DeletionOutcome, DomainError> {
        for policy in self.policies.iter_mut() {
            policy.selected = destinations
                .iter()
                .any(|d| policy.matches_destination(d));
        }
        self.delete_selected(bridge)
    }

    /// Applies a `policy_action_result`. A carried list replaces the cache
    /// first; then the named destination's `applied` flag is confirmed.
    pub fn apply_action_result(&mut self, result: &PolicyActionResult) -> ReconcileOutcome {
        let mut outcome = ReconcileOutcome::default();

        if let Some(records) = &result.policies {
            self.upsert(records.clone());
            outcome.replaced_list = true;
        }

        if let (Some(destination), Some(action)) =
            (result.target_destination(), result.parsed_action())
        {
            if let Some(policy) = self
                .policies
                .iter_mut()
                .find(|p| p.matches_destination(destination))
            {
                policy.applied = action == PolicyAction::Block && !result.failed();
                policy.sync = SyncState::Confirmed;
                outcome.updated_policy = true;
                debug!(
                    destination = %policy.destination,
                    applied = policy.applied,
                    "Policy state confirmed by backend"
                );
            }
        }

        outcome
    }
}
