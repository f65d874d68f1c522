//! Per-path aggregation of log entries.

use crate::models::LogEntry;
use std::collections::HashMap;

/// Aggregated figures for every entry sharing one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStatistics {
    pub count: u64,
    /// Widened so a batch of caller-supplied durations cannot overflow
    pub total_duration: i128,
    pub min_duration: i64,
    pub max_duration: i64,
    /// Entries with status >= 400
    pub error_count: u64,
}

impl PathStatistics {
    fn first(entry: &LogEntry) -> Self {
        Self {
            count: 0,
            total_duration: 0,
            min_duration: entry.duration,
            max_duration: entry.duration,
            error_count: 0,
        }
    }

    fn record(&mut self, entry: &LogEntry) {
        self.count += 1;
        self.total_duration += i128::from(entry.duration);
        self.min_duration = self.min_duration.min(entry.duration);
        self.max_duration = self.max_duration.max(entry.duration);
        if entry.status >= 400 {
            self.error_count += 1;
        }
    }

    /// Mean duration, truncated toward zero.
    ///
    /// Always within `min_duration..=max_duration`, so the narrowing is lossless.
    pub fn avg_duration(&self) -> i64 {
        let avg = self.total_duration / i128::from(self.count);
        i64::try_from(avg).unwrap_or(if avg < 0 { i64::MIN } else { i64::MAX })
    }

    /// Share of error responses as a percentage.
    pub fn error_rate(&self) -> f64 {
        self.error_count as f64 / self.count as f64 * 100.0
    }
}

/// Group entries by path.
///
/// Iteration order of the returned map is unspecified.
pub fn aggregate(entries: &[LogEntry]) -> HashMap<String, PathStatistics> {
    let mut stats: HashMap<String, PathStatistics> = HashMap::new();

    for entry in entries {
        stats
            .entry(entry.path.clone())
            .or_insert_with(|| PathStatistics::first(entry))
            .record(entry);
    }

    stats
}
