//! Error kinds surfaced by the analysis pipeline and the HTTP layer.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::models::ErrorResponse;

/// Every failure the service can report to a caller.
///
/// Variants that come from the generative-text endpoint keep the raw
/// response body (or the extracted candidate payload) so a mismatch between
/// the prompt's requested shape and the model's actual reply can be
/// diagnosed from the error message alone.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("invalid request body: {0}")]
    InputValidation(String),

    #[error("error making request to generative-text endpoint: {0}")]
    Network(#[source] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    RemoteApi { status: u16, body: String },

    #[error("missing or invalid `{field}` in generative-text response: {body}")]
    MalformedResponse { field: &'static str, body: String },

    #[error("error parsing analysis result: {source}, response: {payload}")]
    ResultParse {
        #[source]
        source: serde_json::Error,
        payload: String,
    },

    #[error("error converting to CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("upload storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl AnalyticsError {
    /// Short label for logs and metric outcomes.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyticsError::InputValidation(_) => "input_validation",
            AnalyticsError::Network(e) if e.is_timeout() => "timeout",
            AnalyticsError::Network(_) => "network_error",
            AnalyticsError::RemoteApi { .. } => "remote_api_error",
            AnalyticsError::MalformedResponse { .. } => "malformed_response",
            AnalyticsError::ResultParse { .. } => "result_parse_error",
            AnalyticsError::Csv(_) => "csv_error",
            AnalyticsError::Storage(_) => "storage_error",
        }
    }
}

impl ResponseError for AnalyticsError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalyticsError::InputValidation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
