use seer_domain::{DomainError, OutboundMessage};

/// Outbound half of the message bridge.
///
/// `send` is fire-and-forget: it only queues the message and never waits
/// for the flow to answer. Results come back later as separate inbound
/// messages. An `Err` means the message was rejected synchronously.
pub trait BridgePort: Send + Sync {
    fn send(&self, message: OutboundMessage) -> Result<(), DomainError>;

    fn is_ready(&self) -> bool;
}
