use seer_application::ports::{NotificationLevel, NotifierPort};
use tracing::{error, info, warn};

/// Operator notices as log events under the `seer::notify` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotifierPort for TracingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Info | NotificationLevel::Success => {
                info!(target: "seer::notify", level = ?level, "{}", message)
            }
            NotificationLevel::Warning => warn!(target: "seer::notify", "{}", message),
            NotificationLevel::Error => error!(target: "seer::notify", "{}", message),
        }
    }
}
