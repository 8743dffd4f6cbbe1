pub mod devices;
pub mod firewall;
pub mod handle_bridge_message;
pub mod policies;
pub mod system_action;
pub mod telemetry;

pub use devices::*;
pub use firewall::*;
pub use handle_bridge_message::HandleBridgeMessageUseCase;
pub use policies::*;
pub use system_action::SystemActionUseCase;
pub use telemetry::*;
