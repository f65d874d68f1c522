//! Log and performance analysis endpoint handlers.

use crate::models::{LogAnalysisResponse, LogEntry, PerformanceAnalysisResponse};
use crate::services::AnalyticsService;
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;
use tracing::info;

/// AI log analysis endpoint
///
/// Aggregates the submitted entries per path, asks the generative-text
/// endpoint to interpret them, and returns the decoded analysis.
#[api_v2_operation(
    summary = "Log Analysis",
    description = "Analyze a batch of log entries: popular pages, slow pages, potential issues and insights.",
    tags("Analysis"),
    responses(
        (status = 200, description = "Analysis generated successfully", body = LogAnalysisResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Remote analysis or result parsing failed")
    )
)]
pub async fn analyze_logs(
    service: web::Data<AnalyticsService>,
    body: web::Json<Vec<LogEntry>>,
) -> Result<web::Json<LogAnalysisResponse>, Error> {
    let logs = body.into_inner();
    info!(entries = logs.len(), "Log analysis request received");

    let analysis = service.analyze_logs(&logs).await?;

    info!(
        popular_pages = analysis.popular_pages.len(),
        potential_issues = analysis.potential_issues.len(),
        "Log analysis returned"
    );

    Ok(web::Json(LogAnalysisResponse { analysis }))
}

/// AI performance analysis endpoint
#[api_v2_operation(
    summary = "Performance Analysis",
    description = "Analyze per-endpoint latency and error rates: slow endpoints, patterns, resource issues and recommendations.",
    tags("Analysis"),
    responses(
        (status = 200, description = "Analysis generated successfully", body = PerformanceAnalysisResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Remote analysis or result parsing failed")
    )
)]
pub async fn analyze_performance(
    service: web::Data<AnalyticsService>,
    body: web::Json<Vec<LogEntry>>,
) -> Result<web::Json<PerformanceAnalysisResponse>, Error> {
    let logs = body.into_inner();
    info!(entries = logs.len(), "Performance analysis request received");

    let analysis = service.analyze_performance(&logs).await?;

    Ok(web::Json(PerformanceAnalysisResponse { analysis }))
}
