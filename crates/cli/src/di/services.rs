use seer_application::ports::{
    BridgePort, ClockPort, FirewallApiPort, NotifierPort, TelemetryCachePort,
};
use seer_application::services::{
    DeviceRegistry, FirewallState, PolicyStore, SharedDeviceRegistry, SharedFirewallState,
    SharedPolicyStore, SharedTelemetryState, TelemetryState,
};
use seer_domain::{BridgeEnvelope, Config};
use seer_infrastructure::bridge::{bridge, BridgeConnection};
use seer_infrastructure::firewall_api::HttpFirewallApi;
use seer_infrastructure::system::{SystemClock, TracingNotifier};
use seer_infrastructure::telemetry::FileTelemetryCache;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Adapters and shared state. The bridge connection and the inbound
/// receiver are handed to the runtime by [`Services::take_bridge`].
pub struct Services {
    pub policies: SharedPolicyStore,
    pub devices: SharedDeviceRegistry,
    pub firewall: SharedFirewallState,
    pub telemetry: SharedTelemetryState,
    pub bridge: Arc<dyn BridgePort>,
    pub firewall_api: Arc<dyn FirewallApiPort>,
    pub telemetry_cache: Arc<dyn TelemetryCachePort>,
    pub clock: Arc<dyn ClockPort>,
    pub notifier: Arc<dyn NotifierPort>,
    connection: Option<(BridgeConnection, mpsc::UnboundedReceiver<BridgeEnvelope>)>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let (client, connection, inbound) = bridge(&config.bridge);
        let firewall_api = HttpFirewallApi::from_config(&config.firewall_api)?;
        info!(base_url = %firewall_api.base_url(), "Firewall API client ready");

        Ok(Self {
            policies: PolicyStore::shared(),
            devices: DeviceRegistry::shared(),
            firewall: FirewallState::shared(),
            telemetry: TelemetryState::shared(config.telemetry.history_len),
            bridge: client,
            firewall_api: Arc::new(firewall_api),
            telemetry_cache: Arc::new(FileTelemetryCache::new(&config.telemetry.cache_path)),
            clock: Arc::new(SystemClock),
            notifier: Arc::new(TracingNotifier),
            connection: Some((connection, inbound)),
        })
    }

    pub fn take_bridge(
        &mut self,
    ) -> Option<(BridgeConnection, mpsc::UnboundedReceiver<BridgeEnvelope>)> {
        self.connection.take()
    }
}
