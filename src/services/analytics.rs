//! Analysis pipeline: aggregate, render, generate, decode.

use crate::error::AnalyticsError;
use crate::models::{AnalysisResult, LogEntry, PerformanceAnalysis};
use crate::services::gemini::GeminiClient;
use crate::services::metrics::AppMetrics;
use crate::services::prompt::{self, PROMPT_CHUNK_SIZE};
use crate::services::{csv_export, normalizer, statistics};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Analysis service shared by every request handler.
///
/// Holds no per-request state; concurrent calls are independent.
pub struct AnalyticsService {
    client: GeminiClient,
    metrics: Option<AppMetrics>,
}

impl AnalyticsService {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            metrics: None,
        }
    }

    /// Record analysis outcomes and remote call durations into `metrics`.
    pub fn with_metrics(mut self, metrics: AppMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// General log analysis over notable events and per-path statistics.
    pub async fn analyze_logs(&self, logs: &[LogEntry]) -> Result<AnalysisResult, AnalyticsError> {
        let stats = statistics::aggregate(logs);
        let notable = logs.iter().filter(|e| e.is_notable()).count();

        info!(
            entries = logs.len(),
            paths = stats.len(),
            notable,
            "Analyzing logs"
        );

        let prompt = prompt::log_analysis_prompt(logs, &stats);
        self.run("logs", &prompt).await
    }

    /// Performance analysis over per-path duration statistics.
    pub async fn analyze_performance(
        &self,
        logs: &[LogEntry],
    ) -> Result<PerformanceAnalysis, AnalyticsError> {
        let stats = statistics::aggregate(logs);

        info!(
            entries = logs.len(),
            paths = stats.len(),
            "Analyzing performance"
        );

        let prompt = prompt::performance_prompt(&stats);
        self.run("performance", &prompt).await
    }

    pub fn convert_to_csv(&self, logs: &[LogEntry]) -> Result<Vec<u8>, AnalyticsError> {
        let csv = csv_export::to_csv(logs)?;
        debug!(entries = logs.len(), bytes = csv.len(), "Converted logs to CSV");
        Ok(csv)
    }

    async fn run<T: DeserializeOwned>(&self, kind: &str, prompt: &str) -> Result<T, AnalyticsError> {
        if prompt.len() > PROMPT_CHUNK_SIZE {
            warn!(
                kind,
                prompt_chars = prompt.len(),
                chunk_size = PROMPT_CHUNK_SIZE,
                "Prompt exceeds chunk size; sending as a single request"
            );
        }

        let start = Instant::now();
        let reply = self.client.generate(prompt).await;
        if let Some(metrics) = &self.metrics {
            let outcome = match &reply {
                Ok(_) => "success",
                Err(e) => e.kind(),
            };
            metrics.record_remote_call(outcome, start.elapsed());
        }

        let result = reply.and_then(|text| normalizer::decode::<T>(&text));

        match &result {
            Ok(_) => info!(
                kind,
                duration_ms = start.elapsed().as_millis(),
                "Analysis completed"
            ),
            Err(e) => error!(kind, error = %e, error_kind = e.kind(), "Analysis failed"),
        }

        if let Some(metrics) = &self.metrics {
            let outcome = result.as_ref().map_or_else(|e| e.kind(), |_| "success");
            metrics.record_analysis(kind, outcome);
        }

        result
    }
}
