//! Extraction of the JSON object from a free-text model reply.

use crate::error::AnalyticsError;
use serde::de::DeserializeOwned;

/// Strip markdown fencing and keep the span from the first `{` to the last `}`.
///
/// When no such span exists the cleaned text is returned whole and will fail
/// to decode downstream. Braces inside leading commentary are not told apart
/// from the real object.
pub fn extract_candidate(response: &str) -> String {
    let cleaned = response
        .replace('`', "")
        .replace("```json", "")
        .replace("```", "");

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if end > start => cleaned[start..=end].to_string(),
        _ => cleaned,
    }
}

/// Decode a model reply into `T`.
pub fn decode<T: DeserializeOwned>(response: &str) -> Result<T, AnalyticsError> {
    let payload = extract_candidate(response);
    serde_json::from_str(&payload).map_err(|source| AnalyticsError::ResultParse { source, payload })
}
