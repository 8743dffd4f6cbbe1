mod file_cache;

pub use file_cache::FileTelemetryCache;
