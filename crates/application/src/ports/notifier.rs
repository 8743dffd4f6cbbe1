#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Operator-facing notifications (the toast/alert channel).
pub trait NotifierPort: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}
