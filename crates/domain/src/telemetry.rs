use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_LEN: usize = 5;
pub const SERIES_NAMES: [&str; 5] = ["Core 0", "Core 1", "Core 2", "Core 3", "Overall"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreUsage {
    #[serde(default)]
    pub core0: f64,
    #[serde(default)]
    pub core1: f64,
    #[serde(default)]
    pub core2: f64,
    #[serde(default)]
    pub core3: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    #[serde(default)]
    pub used: f64,
    #[serde(default)]
    pub cache: f64,
}

/// Inbound `telemetry` payload. Either part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    #[serde(default)]
    pub cores: Option<CoreUsage>,
    #[serde(default)]
    pub overall: Option<f64>,
    #[serde(default)]
    pub memory: Option<MemoryUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
}

/// Rolling CPU chart history: one label per sample and one series per core
/// plus the overall figure. This is the only client state persisted
/// between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuHistory {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_LEN
}

impl Default for CpuHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_LEN)
    }
}

impl CpuHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            datasets: SERIES_NAMES
                .iter()
                .map(|name| Series {
                    label: name.to_string(),
                    data: Vec::with_capacity(capacity),
                })
                .collect(),
            capacity: capacity.max(1),
        }
    }

    /// Merges a restored history into a fresh one of the given capacity.
    /// Series beyond the known five are ignored; extra samples are trimmed
    /// from the front.
    pub fn restore(saved: CpuHistory, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        history.labels = saved.labels;
        for (slot, series) in history.datasets.iter_mut().zip(saved.datasets) {
            slot.data = series.data;
        }
        history.trim();
        history
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn push(&mut self, label: impl Into<String>, cores: CoreUsage, overall: f64) {
        while self.labels.len() >= self.capacity {
            self.labels.remove(0);
            for series in &mut self.datasets {
                if !series.data.is_empty() {
                    series.data.remove(0);
                }
            }
        }

        self.labels.push(label.into());
        let values = [cores.core0, cores.core1, cores.core2, cores.core3, overall];
        for (series, value) in self.datasets.iter_mut().zip(values) {
            series.data.push(value);
        }
    }

    fn trim(&mut self) {
        let excess = self.labels.len().saturating_sub(self.capacity);
        self.labels.drain(..excess);
        for series in &mut self.datasets {
            let excess = series.data.len().saturating_sub(self.capacity);
            series.data.drain(..excess);
        }
    }
}
