//! SEER Domain Layer
pub mod config;
pub mod device;
pub mod errors;
pub mod firewall;
pub mod message;
pub mod policy;
pub mod schedule;
pub mod telemetry;

pub use config::{CliOverrides, Config, ConfigError};
pub use device::{format_lease_time, normalize_mac, BlockedDevice, DhcpLease, LeaseType, UnblockResult};
pub use errors::DomainError;
pub use firewall::{
    validate_ip, BlacklistEntry, CustomRule, CustomRuleForm, FirewallRule, FirewallStatus,
    NewCustomRule, RuleToggleField,
};
pub use message::{BridgeEnvelope, InboundMessage, OutboundMessage, SystemAction};
pub use policy::{
    Policy, PolicyAction, PolicyActionResult, PolicyCommand, PolicyRecord, StatusFilter, SyncState,
};
pub use schedule::{is_now_in_schedule, Schedule};
pub use telemetry::{CoreUsage, CpuHistory, MemoryUsage, TelemetrySample};
