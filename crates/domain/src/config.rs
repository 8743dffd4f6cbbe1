pub mod bridge;
pub mod errors;
pub mod firewall_api;
pub mod logging;
pub mod root;
pub mod scheduler;
pub mod telemetry;

pub use bridge::BridgeConfig;
pub use errors::ConfigError;
pub use firewall_api::FirewallApiConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use scheduler::SchedulerConfig;
pub use telemetry::TelemetryConfig;
