use futures::{SinkExt, StreamExt};
use seer_domain::BridgeEnvelope;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::{Framed, LinesCodec};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::client::OutboundSlot;

const MAX_LINE_LENGTH: usize = 1024 * 1024;

enum SessionEnd {
    Shutdown,
    Disconnected,
}

/// Owns the TCP session with the flow. Runs until cancelled, reconnecting
/// after `reconnect_delay` whenever the socket closes or fails to open.
pub struct BridgeConnection {
    address: String,
    reconnect_delay: Duration,
    outbound: OutboundSlot,
    inbound: mpsc::UnboundedSender<BridgeEnvelope>,
}

impl BridgeConnection {
    pub(crate) fn new(
        address: String,
        reconnect_delay: Duration,
        outbound: OutboundSlot,
        inbound: mpsc::UnboundedSender<BridgeEnvelope>,
    ) -> Self {
        Self {
            address,
            reconnect_delay,
            outbound,
            inbound,
        }
    }

    pub async fn run(self, shutdown: CancellationToken) {
        info!(address = %self.address, "Starting bridge connection");

        loop {
            let connect = tokio::select! {
                _ = shutdown.cancelled() => break,
                result = TcpStream::connect(&self.address) => result,
            };

            match connect {
                Ok(stream) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        debug!(error = %e, "Failed to set TCP_NODELAY on bridge socket");
                    }
                    info!(address = %self.address, "Bridge connected");

                    let (tx, rx) = mpsc::unbounded_channel();
                    self.outbound.store(Some(Arc::new(tx)));
                    let end = self.session(stream, rx, &shutdown).await;
                    self.outbound.store(None);

                    if let SessionEnd::Shutdown = end {
                        break;
                    }
                    warn!(address = %self.address, "Bridge disconnected");
                }
                Err(e) => {
                    warn!(address = %self.address, error = %e, "Bridge connection failed");
                }
            }

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.reconnect_delay) => {}
            }
        }

        info!("Bridge connection stopped");
    }

    async fn session(
        &self,
        stream: TcpStream,
        mut outgoing: mpsc::UnboundedReceiver<BridgeEnvelope>,
        shutdown: &CancellationToken,
    ) -> SessionEnd {
        let mut framed = Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_LENGTH));

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => return SessionEnd::Shutdown,

                Some(envelope) = outgoing.recv() => {
                    let line = match serde_json::to_string(&envelope) {
                        Ok(line) => line,
                        Err(e) => {
                            warn!(topic = %envelope.topic, error = %e, "Failed to encode bridge message");
                            continue;
                        }
                    };
                    if let Err(e) = framed.send(line).await {
                        warn!(topic = %envelope.topic, error = %e, "Failed to write bridge message");
                        return SessionEnd::Disconnected;
                    }
                    debug!(topic = %envelope.topic, "Bridge message sent");
                }

                frame = framed.next() => match frame {
                    Some(Ok(line)) => self.forward(&line),
                    Some(Err(e)) => {
                        warn!(error = %e, "Bridge read error");
                        return SessionEnd::Disconnected;
                    }
                    None => return SessionEnd::Disconnected,
                },
            }
        }
    }

    fn forward(&self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        match serde_json::from_str::<BridgeEnvelope>(line) {
            Ok(envelope) => {
                debug!(topic = %envelope.topic, "Bridge message received");
                if self.inbound.send(envelope).is_err() {
                    debug!("Inbound receiver dropped, discarding bridge message");
                }
            }
            Err(e) => warn!(error = %e, "Dropping undecodable bridge frame"),
        }
    }
}
