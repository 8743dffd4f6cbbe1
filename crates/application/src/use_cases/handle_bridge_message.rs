use seer_domain::{BridgeEnvelope, DomainError, InboundMessage, OutboundMessage, UnblockResult};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::ports::{BridgePort, NotificationLevel, NotifierPort};
use crate::services::{SharedDeviceRegistry, SharedFirewallState, SharedPolicyStore};
use crate::use_cases::telemetry::RecordTelemetryUseCase;

/// Routes every inbound bridge frame to the state it updates.
pub struct HandleBridgeMessageUseCase {
    policies: SharedPolicyStore,
    devices: SharedDeviceRegistry,
    firewall: SharedFirewallState,
    telemetry: Arc<RecordTelemetryUseCase>,
    bridge: Arc<dyn BridgePort>,
    notifier: Arc<dyn NotifierPort>,
}

impl HandleBridgeMessageUseCase {
    pub fn new(
        policies: SharedPolicyStore,
        devices: SharedDeviceRegistry,
        firewall: SharedFirewallState,
        telemetry: Arc<RecordTelemetryUseCase>,
        bridge: Arc<dyn BridgePort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            policies,
            devices,
            firewall,
            telemetry,
            bridge,
            notifier,
        }
    }

    /// Decodes and dispatches one frame. A malformed payload is logged and
    /// dropped without touching any state.
    pub async fn execute(&self, envelope: BridgeEnvelope) -> Result<(), DomainError> {
        let message = InboundMessage::decode(envelope).inspect_err(|e| {
            warn!(error = %e, "Dropping malformed bridge message");
        })?;
        self.dispatch(message).await;
        Ok(())
    }

    pub async fn dispatch(&self, message: InboundMessage) {
        match message {
            InboundMessage::Policies(records) => {
                self.policies.lock().await.upsert(records);
            }
            InboundMessage::PolicyActionResult(result) => {
                if result.failed() {
                    let message = result.message.as_deref().unwrap_or("Policy action failed");
                    warn!(destination = ?result.target_destination(), message, "Policy action failed");
                    self.notifier.notify(NotificationLevel::Error, message);
                } else if result.success == Some(true) {
                    debug!(message = ?result.message, "Policy action succeeded");
                }
                self.policies.lock().await.apply_action_result(&result);
            }
            InboundMessage::Echo { topic } => {
                debug!(topic = %topic, "Ignoring echoed request");
            }
            InboundMessage::Devices(leases) => {
                info!(count = leases.len(), "DHCP leases received");
                self.devices.lock().await.replace_leases(leases);
            }
            InboundMessage::BlockedDevices(devices) => {
                let mut registry = self.devices.lock().await;
                registry.replace_blocked(devices, Instant::now());
                info!(count = registry.blocked().len(), "Blocked devices updated");
            }
            InboundMessage::UnblockResult(result) => self.handle_unblock_result(result).await,
            InboundMessage::FirewallStatus(status) => {
                self.firewall.lock().await.apply_status(status);
            }
            InboundMessage::BlacklistUpdate(entries) => {
                info!(count = entries.len(), "Blacklist updated");
                self.firewall.lock().await.replace_blacklist(entries);
            }
            InboundMessage::ConfigReloaded => {
                self.notifier.notify(
                    NotificationLevel::Success,
                    "Configuration reloaded successfully",
                );
            }
            InboundMessage::Telemetry(sample) => {
                self.telemetry.execute(sample).await;
            }
            InboundMessage::Error { message } => {
                let message = message.as_deref().unwrap_or("An error occurred on the router!");
                error!(message, "Router reported an error");
                self.notifier.notify(NotificationLevel::Error, message);
            }
            InboundMessage::Unhandled { topic, payload } => {
                warn!(topic = %topic, "Unknown bridge topic");
                if let Value::String(text) = &payload {
                    if text.contains("Error") {
                        error!(payload = %text, "Error reported in payload");
                        self.notifier.notify(
                            NotificationLevel::Error,
                            "Execution Error: Check the router flow logs or script permissions.",
                        );
                    }
                }
            }
        }
    }

    async fn handle_unblock_result(&self, result: UnblockResult) {
        if !result.success {
            self.notifier.notify(
                NotificationLevel::Error,
                "Failed to unblock device. Check the router flow logs.",
            );
            return;
        }

        let mac = result.mac.unwrap_or_default();
        self.devices.lock().await.remove_blocked(&mac);
        info!(mac = %mac, "Device unblocked");
        self.notifier.notify(
            NotificationLevel::Success,
            &format!("Device {} unblocked successfully", mac),
        );

        if let Err(e) = self.bridge.send(OutboundMessage::FetchDevices) {
            warn!(error = %e, "Failed to refresh devices after unblock");
        }
    }
}
