pub mod firewall_status;
pub mod initial_sync;
pub mod policy_schedule;
pub mod runner;

pub use firewall_status::FirewallStatusJob;
pub use initial_sync::InitialSyncJob;
pub use policy_schedule::PolicyScheduleJob;
pub use runner::JobRunner;
