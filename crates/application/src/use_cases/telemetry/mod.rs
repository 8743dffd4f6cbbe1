mod load_cpu_history;
mod record_telemetry;

pub use load_cpu_history::LoadCpuHistoryUseCase;
pub use record_telemetry::RecordTelemetryUseCase;
