mod bridge;
mod clock;
mod firewall_api;
mod notifier;
mod telemetry_cache;

pub use bridge::BridgePort;
pub use clock::ClockPort;
pub use firewall_api::FirewallApiPort;
pub use notifier::{NotificationLevel, NotifierPort};
pub use telemetry_cache::TelemetryCachePort;
