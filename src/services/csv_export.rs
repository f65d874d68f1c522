//! CSV rendering of raw log entries.

use crate::error::AnalyticsError;
use crate::models::LogEntry;

/// Fixed column set; metadata is never exported.
pub const CSV_HEADER: [&str; 7] = [
    "timestamp",
    "level",
    "message",
    "path",
    "method",
    "duration",
    "status",
];

/// Render entries as CSV with a header row, quoting only where needed.
pub fn to_csv(entries: &[LogEntry]) -> Result<Vec<u8>, AnalyticsError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for entry in entries {
        let duration = entry.duration.to_string();
        let status = entry.status.to_string();
        writer.write_record([
            entry.timestamp.as_str(),
            entry.level.as_str(),
            entry.message.as_str(),
            entry.path.as_str(),
            entry.method.as_str(),
            duration.as_str(),
            status.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| AnalyticsError::Csv(e.into_error().into()))
}
