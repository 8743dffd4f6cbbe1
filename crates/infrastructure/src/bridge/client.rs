use arc_swap::ArcSwapOption;
use seer_application::ports::BridgePort;
use seer_domain::{BridgeEnvelope, DomainError, OutboundMessage};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, warn};

pub(crate) type OutboundSlot = Arc<ArcSwapOption<UnboundedSender<BridgeEnvelope>>>;

#[derive(Debug, Clone, Copy)]
pub struct SendRetryPolicy {
    pub delay: Duration,
    pub attempts: u32,
}

impl Default for SendRetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(200),
            attempts: 5,
        }
    }
}

/// Sending half of the bridge.
///
/// While a connection is up its writer queue sits in `outbound`; when it is
/// down, messages are retried in the background on a fixed delay and then
/// dropped with an error log.
pub struct BridgeClient {
    outbound: OutboundSlot,
    retry: SendRetryPolicy,
}

impl BridgeClient {
    pub fn new(retry: SendRetryPolicy) -> Self {
        Self {
            outbound: Arc::new(ArcSwapOption::empty()),
            retry,
        }
    }

    pub(crate) fn outbound_slot(&self) -> OutboundSlot {
        self.outbound.clone()
    }

    fn try_enqueue(slot: &OutboundSlot, envelope: BridgeEnvelope) -> Result<(), BridgeEnvelope> {
        match slot.load_full() {
            Some(tx) => tx.send(envelope).map_err(|e| e.0),
            None => Err(envelope),
        }
    }

    fn schedule_retry(&self, envelope: BridgeEnvelope) -> Result<(), DomainError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| DomainError::BridgeUnavailable)?;

        let slot = self.outbound.clone();
        let retry = self.retry;

        debug!(topic = %envelope.topic, "Bridge not ready, queueing retry");

        runtime.spawn(async move {
            let mut pending = envelope;
            for attempt in 1..=retry.attempts {
                tokio::time::sleep(retry.delay).await;
                match Self::try_enqueue(&slot, pending) {
                    Ok(()) => {
                        debug!(attempt, "Bridge message sent after retry");
                        return;
                    }
                    Err(envelope) => pending = envelope,
                }
            }
            error!(
                topic = %pending.topic,
                attempts = retry.attempts,
                "Bridge unavailable, message dropped"
            );
        });

        Ok(())
    }
}

impl Default for BridgeClient {
    fn default() -> Self {
        Self::new(SendRetryPolicy::default())
    }
}

impl BridgePort for BridgeClient {
    fn send(&self, message: OutboundMessage) -> Result<(), DomainError> {
        let envelope = message.into_envelope()?;

        match Self::try_enqueue(&self.outbound, envelope) {
            Ok(()) => Ok(()),
            Err(envelope) => {
                if self.retry.attempts == 0 {
                    warn!(topic = %envelope.topic, "Bridge unavailable, message dropped");
                    return Err(DomainError::BridgeUnavailable);
                }
                self.schedule_retry(envelope)
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.outbound
            .load_full()
            .is_some_and(|tx| !tx.is_closed())
    }
}
