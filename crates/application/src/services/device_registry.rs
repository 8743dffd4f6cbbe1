use seer_domain::{normalize_mac, BlockedDevice, DhcpLease};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

pub type SharedDeviceRegistry = Arc<Mutex<DeviceRegistry>>;

const DEFAULT_SUPPRESSION: Duration = Duration::from_secs(5);

/// Last DHCP lease snapshot and blocked-device list.
///
/// A MAC unblocked locally is hidden from incoming blocked lists for a
/// short window, since the flow may push a stale list before it has
/// finished removing the block.
#[derive(Debug)]
pub struct DeviceRegistry {
    leases: Vec<DhcpLease>,
    blocked: Vec<BlockedDevice>,
    recently_unblocked: HashMap<String, Instant>,
    suppression: Duration,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::with_suppression(DEFAULT_SUPPRESSION)
    }

    pub fn with_suppression(suppression: Duration) -> Self {
        Self {
            leases: Vec::new(),
            blocked: Vec::new(),
            recently_unblocked: HashMap::new(),
            suppression,
        }
    }

    pub fn shared() -> SharedDeviceRegistry {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn leases(&self) -> &[DhcpLease] {
        &self.leases
    }

    pub fn blocked(&self) -> &[BlockedDevice] {
        &self.blocked
    }

    pub fn replace_leases(&mut self, leases: Vec<DhcpLease>) {
        self.leases = leases;
    }

    pub fn replace_blocked(&mut self, devices: Vec<BlockedDevice>, now: Instant) {
        self.expire_suppressions(now);
        self.blocked = devices
            .into_iter()
            .filter(|d| {
                let suppressed = self.recently_unblocked.contains_key(&d.normalized_mac());
                if suppressed {
                    debug!(mac = %d.mac, "Hiding recently unblocked device");
                }
                !suppressed
            })
            .collect();
    }

    pub fn clear_blocked(&mut self) {
        self.blocked.clear();
    }

    /// Records a local unblock and drops the device from the list.
    pub fn mark_unblocked(&mut self, mac: &str, now: Instant) {
        let mac = normalize_mac(mac);
        self.remove_blocked(&mac);
        self.recently_unblocked.insert(mac, now);
    }

    /// Returns how many entries were removed.
    pub fn remove_blocked(&mut self, mac: &str) -> usize {
        let mac = normalize_mac(mac);
        let before = self.blocked.len();
        self.blocked.retain(|d| d.normalized_mac() != mac);
        before - self.blocked.len()
    }

    pub fn is_suppressed(&self, mac: &str, now: Instant) -> bool {
        self.recently_unblocked
            .get(&normalize_mac(mac))
            .is_some_and(|at| now.duration_since(*at) < self.suppression)
    }

    fn expire_suppressions(&mut self, now: Instant) {
        let window = self.suppression;
        self.recently_unblocked
            .retain(|_, at| now.duration_since(*at) < window);
    }
}
