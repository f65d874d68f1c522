//! HTTP response bodies.

use crate::models::analysis::{AnalysisResult, PerformanceAnalysis};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct LogAnalysisResponse {
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct PerformanceAnalysisResponse {
    pub analysis: PerformanceAnalysis,
}

/// Response for a file that was stored and then analysed
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct UploadResponse {
    pub message: String,
    pub analysis: AnalysisResult,
}

/// Body of every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
}
