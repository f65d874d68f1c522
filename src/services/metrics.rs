//! Prometheus metrics for HTTP traffic and analysis outcomes.

use prometheus::{CounterVec, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::{Duration, Instant};

pub const METRICS_ROUTE: &str = "/metrics";

/// Application metrics collector
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub analysis_requests_total: CounterVec,
    pub remote_request_duration_seconds: HistogramVec,
    pub app_uptime_seconds: Gauge,
    pub app_info: CounterVec,
    pub start_time: Instant,
}

impl AppMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "status", "route"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 15.0,
            ]),
            &["method", "route"],
        )?;

        let analysis_requests_total = CounterVec::new(
            Opts::new(
                "analysis_requests_total",
                "Analysis requests by kind (logs, performance) and outcome",
            ),
            &["kind", "outcome"],
        )?;

        // Upper bucket matches the generative-text request timeout.
        let remote_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "remote_request_duration_seconds",
                "Duration of generative-text endpoint calls in seconds",
            )
            .buckets(vec![0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 15.0]),
            &["outcome"],
        )?;

        let app_uptime_seconds = Gauge::new("app_uptime_seconds", "Application uptime in seconds")?;

        let app_info = CounterVec::new(
            Opts::new("app_info", "Application information"),
            &["version", "commit", "build_time"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(analysis_requests_total.clone()))?;
        registry.register(Box::new(remote_request_duration_seconds.clone()))?;
        registry.register(Box::new(app_uptime_seconds.clone()))?;
        registry.register(Box::new(app_info.clone()))?;

        app_info
            .with_label_values(&[
                env!("CARGO_PKG_VERSION"),
                option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
                option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
            ])
            .inc();

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            analysis_requests_total,
            remote_request_duration_seconds,
            app_uptime_seconds,
            app_info,
            start_time: Instant::now(),
        })
    }

    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        if route == METRICS_ROUTE {
            return;
        }

        let status = status.to_string();
        self.http_requests_total
            .with_label_values(&[method, status.as_str(), route])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration.as_secs_f64());
    }

    /// Record the end of one analysis; `outcome` is "success" or an error kind.
    pub fn record_analysis(&self, kind: &str, outcome: &str) {
        self.analysis_requests_total
            .with_label_values(&[kind, outcome])
            .inc();
    }

    pub fn record_remote_call(&self, outcome: &str, duration: Duration) {
        self.remote_request_duration_seconds
            .with_label_values(&[outcome])
            .observe(duration.as_secs_f64());
    }

    pub fn update_uptime(&self) {
        self.app_uptime_seconds
            .set(self.start_time.elapsed().as_secs_f64());
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        encoder.encode_to_string(&self.registry.gather())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_endpoint_is_not_recorded() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_request("GET", METRICS_ROUTE, 200, Duration::from_millis(1));
        metrics.record_request("POST", "/analyze/logs", 200, Duration::from_millis(5));

        let rendered = metrics.render().unwrap();
        assert!(rendered.contains(r#"route="/analyze/logs""#));
        assert!(!rendered.contains(r#"route="/metrics""#));
    }

    #[test]
    fn test_analysis_outcomes_are_counted() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_analysis("logs", "success");
        metrics.record_analysis("logs", "success");
        metrics.record_analysis("performance", "remote_api_error");

        let success = metrics
            .analysis_requests_total
            .with_label_values(&["logs", "success"])
            .get();
        assert_eq!(success, 2.0);

        let rendered = metrics.render().unwrap();
        assert!(rendered.contains(r#"outcome="remote_api_error""#));
        assert!(rendered.contains("app_info"));
    }
}
