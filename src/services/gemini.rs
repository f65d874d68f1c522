//! Client for the generative-text endpoint.
//!
//! One attempt per call, bounded by [`REQUEST_TIMEOUT`]. Failures are never
//! retried; the caller sees them directly.

use crate::error::AnalyticsError;
use crate::models::GenerateContentRequest;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client bound to one endpoint and API key
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(api_key, endpoint, REQUEST_TIMEOUT)
    }

    /// Like [`GeminiClient::new`] with a different bound on each call.
    pub fn with_timeout(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `prompt` and return the generated text of the first candidate.
    pub async fn generate(&self, prompt: &str) -> Result<String, AnalyticsError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let start = Instant::now();

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(
                    endpoint = %self.endpoint,
                    error = %e,
                    timeout = e.is_timeout(),
                    duration_ms = start.elapsed().as_millis(),
                    "Generative-text request failed"
                );
                AnalyticsError::Network(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(AnalyticsError::Network)?;

        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            duration_ms = start.elapsed().as_millis(),
            "Generative-text response received"
        );

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "Generative-text endpoint returned an error");
            return Err(AnalyticsError::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        extract_text(body)
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
pub fn extract_text(body: String) -> Result<String, AnalyticsError> {
    let envelope: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Generative-text response is not JSON");
            Value::Null
        }
    };

    let missing = |field: &'static str| {
        warn!(field, "Generative-text response is missing an expected field");
        AnalyticsError::MalformedResponse {
            field,
            body: body.clone(),
        }
    };

    let candidate = envelope
        .get("candidates")
        .and_then(Value::as_array)
        .ok_or_else(|| missing("candidates"))?
        .first()
        .ok_or_else(|| missing("candidates[0]"))?;

    let parts = candidate
        .get("content")
        .filter(|c| c.is_object())
        .ok_or_else(|| missing("candidates[0].content"))?
        .get("parts")
        .and_then(Value::as_array)
        .ok_or_else(|| missing("candidates[0].content.parts"))?;

    let text = parts
        .first()
        .ok_or_else(|| missing("candidates[0].content.parts[0]"))?
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("candidates[0].content.parts[0].text"))?;

    Ok(text.to_string())
}
