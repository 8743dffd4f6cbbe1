//! Line-delimited JSON bridge to the router flow.
//!
//! [`BridgeClient`] is the synchronous, cloneable sending half handed to use
//! cases. [`BridgeConnection`] owns the TCP socket, reconnects when it drops
//! and forwards every inbound envelope to an unbounded channel.

mod client;
mod connection;

pub use client::{BridgeClient, SendRetryPolicy};
pub use connection::BridgeConnection;

use seer_domain::config::BridgeConfig;
use seer_domain::BridgeEnvelope;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Builds both halves of the bridge plus the receiver for inbound frames.
pub fn bridge(
    config: &BridgeConfig,
) -> (
    Arc<BridgeClient>,
    BridgeConnection,
    mpsc::UnboundedReceiver<BridgeEnvelope>,
) {
    let client = Arc::new(BridgeClient::new(SendRetryPolicy {
        delay: Duration::from_millis(config.send_retry_delay_ms),
        attempts: config.send_retry_attempts,
    }));
    let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
    let connection = BridgeConnection::new(
        config.address.clone(),
        Duration::from_millis(config.reconnect_delay_ms),
        client.outbound_slot(),
        inbound_tx,
    );
    (client, connection, inbound_rx)
}
