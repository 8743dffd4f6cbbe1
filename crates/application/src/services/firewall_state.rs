use seer_domain::{BlacklistEntry, FirewallStatus};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedFirewallState = Arc<Mutex<FirewallState>>;

#[derive(Debug, Default)]
pub struct FirewallState {
    blacklist: Vec<BlacklistEntry>,
    rate_limited: Option<u64>,
}

impl FirewallState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedFirewallState {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn blacklist(&self) -> &[BlacklistEntry] {
        &self.blacklist
    }

    pub fn rate_limited(&self) -> Option<u64> {
        self.rate_limited
    }

    pub fn replace_blacklist(&mut self, entries: Vec<BlacklistEntry>) {
        self.blacklist = entries;
    }

    /// Fields absent from the status leave the current values untouched.
    pub fn apply_status(&mut self, status: FirewallStatus) {
        if let Some(blacklist) = status.blacklist {
            self.blacklist = blacklist;
        }
        if let Some(count) = status.rate_limited {
            self.rate_limited = Some(count);
        }
    }
}
