mod device_registry;
mod firewall_state;
mod policy_store;
mod telemetry_state;

pub use device_registry::{DeviceRegistry, SharedDeviceRegistry};
pub use firewall_state::{FirewallState, SharedFirewallState};
pub use policy_store::{
    DeletionOutcome, EvaluationOutcome, PolicyStore, ReconcileOutcome, SharedPolicyStore,
};
pub use telemetry_state::{SharedTelemetryState, TelemetryState};
