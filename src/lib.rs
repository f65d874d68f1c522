//! Analytics AI - log analytics over a generative-text model
//!
//! An Actix Web service that accepts batches of structured log entries,
//! aggregates them per request path and asks the Gemini `generateContent`
//! endpoint to interpret the result:
//! - Log analysis: popular pages, slow pages, potential issues, insights
//! - Performance analysis: slow endpoints, patterns, resource issues
//! - CSV export of the submitted entries
//! - Multipart upload of a JSON log file
//! - Prometheus metrics and OpenAPI documentation
//!
//! ## Architecture
//!
//! - `models/` - Log entries, analysis results and response bodies
//! - `handlers/` - HTTP request handlers and the app factory
//! - `middleware/` - Request IDs and HTTP metrics
//! - `services/` - Aggregation, prompts, the model client, normalisation, CSV
//! - `config/` - Environment loading
//! - `telemetry` - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```no_run
//! use analytics_ai::{AppConfig, AppState, create_app};
//! use actix_web::HttpServer;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = AppConfig::with_api_key("my-key");
//!     let addr = config.bind_address();
//!     let state = AppState::new(config).map_err(std::io::Error::other)?;
//!     HttpServer::new(move || create_app(state.clone()))
//!         .bind(addr)?
//!         .run()
//!         .await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use error::AnalyticsError;
pub use handlers::{
    AppState, StartupError, analyze_logs, analyze_performance, convert_to_csv, create_app,
    create_openapi_spec, get_metrics, health, upload, version,
};
pub use middleware::{MetricsMiddleware, REQUEST_ID_HEADER, RequestId, RequestIdMiddleware};
pub use models::{
    AnalysisResult, ErrorResponse, HealthResponse, Issue, IssuePath, LogAnalysisResponse,
    LogEntry, PerformanceAnalysis, PerformanceAnalysisResponse, PerformanceData, ResourceIssue,
    UploadResponse, VersionResponse,
};
pub use services::{AnalyticsService, AppMetrics, GeminiClient, PathStatistics, UploadStore, aggregate};
pub use telemetry::init_tracing;
