use chrono::NaiveTime;

pub trait ClockPort: Send + Sync {
    /// Local wall-clock time of day.
    fn now(&self) -> NaiveTime;

    /// Label attached to telemetry samples.
    fn timestamp_label(&self) -> String {
        self.now().format("%H:%M:%S").to_string()
    }
}
