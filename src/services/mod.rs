//! Business logic and service layer modules.
//!
//! The analysis pipeline lives here: per-path aggregation, prompt rendering,
//! the generative-text client, reply normalisation and CSV export, plus the
//! supporting metrics and upload storage services.

pub mod analytics;
pub mod csv_export;
pub mod gemini;
pub mod metrics;
pub mod normalizer;
pub mod prompt;
pub mod statistics;
pub mod upload;

pub use analytics::AnalyticsService;
pub use gemini::GeminiClient;
pub use metrics::AppMetrics;
pub use statistics::{PathStatistics, aggregate};
pub use upload::UploadStore;
