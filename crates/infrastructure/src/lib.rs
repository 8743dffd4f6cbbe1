//! SEER Infrastructure Layer
pub mod bridge;
pub mod firewall_api;
pub mod system;
pub mod telemetry;
