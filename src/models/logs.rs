//! Log entry model accepted by every analysis endpoint.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One observed request or event, as supplied by the caller.
///
/// Fields missing from the incoming JSON fall back to their zero value;
/// nothing here is validated beyond the JSON types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(default)]
pub struct LogEntry {
    /// Event time, ISO 8601 expected but not checked
    pub timestamp: String,
    /// Free-text severity label ("info", "warning", "error", ...)
    pub level: String,
    pub message: String,
    /// Request path, used as the aggregation key
    pub path: String,
    pub method: String,
    /// Request duration in milliseconds
    pub duration: i64,
    /// HTTP-style status code
    pub status: i32,
    pub metadata: Option<HashMap<String, String>>,
}

impl LogEntry {
    /// Whether the entry is called out individually in the log-analysis prompt.
    pub fn is_notable(&self) -> bool {
        self.status >= 400 || self.level == "error" || self.level == "warning" || self.duration > 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero_values() {
        let entry: LogEntry = serde_json::from_str(r#"{"path": "/api/users"}"#).unwrap();
        assert_eq!(entry.path, "/api/users");
        assert_eq!(entry.duration, 0);
        assert_eq!(entry.status, 0);
        assert!(entry.metadata.is_none());
    }

    #[test]
    fn test_metadata_is_decoded() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"timestamp":"2024-01-01T00:00:00Z","level":"info","message":"ok","path":"/","method":"GET","duration":5,"status":200,"metadata":{"region":"eu"}}"#,
        )
        .unwrap();
        assert_eq!(
            entry.metadata.unwrap().get("region").map(String::as_str),
            Some("eu")
        );
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<LogEntry>(r#"{"duration": "slow"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_notable_entries() {
        let base = LogEntry {
            level: "info".to_string(),
            duration: 100,
            status: 200,
            ..Default::default()
        };
        assert!(!base.is_notable());
        assert!(LogEntry { status: 404, ..base.clone() }.is_notable());
        assert!(LogEntry { level: "error".to_string(), ..base.clone() }.is_notable());
        assert!(LogEntry { level: "warning".to_string(), ..base.clone() }.is_notable());
        assert!(LogEntry { duration: 1001, ..base.clone() }.is_notable());
        assert!(!LogEntry { duration: 1000, ..base }.is_notable());
    }
}
