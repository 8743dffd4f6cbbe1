use seer_application::use_cases::HandleBridgeMessageUseCase;
use seer_domain::BridgeEnvelope;
use seer_infrastructure::bridge::BridgeConnection;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub fn start_bridge(connection: BridgeConnection, shutdown: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(connection.run(shutdown))
}

/// Feeds every inbound envelope to the handler, one at a time and in
/// arrival order.
pub fn start_dispatch(
    mut inbound: mpsc::UnboundedReceiver<BridgeEnvelope>,
    handler: Arc<HandleBridgeMessageUseCase>,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Inbound dispatch: shutting down");
                    break;
                }
                envelope = inbound.recv() => {
                    let Some(envelope) = envelope else {
                        info!("Inbound channel closed");
                        break;
                    };
                    let topic = envelope.topic.clone();
                    if handler.execute(envelope).await.is_err() {
                        debug!(topic = %topic, "Inbound message dropped");
                    }
                }
            }
        }
    })
}
