//! CSV conversion endpoint handler.

use crate::models::LogEntry;
use crate::services::AnalyticsService;
use actix_web::{Error, HttpResponse, Result, http::header, web};
use paperclip::actix::api_v2_operation;

pub const CSV_FILENAME: &str = "analytics.csv";

/// Export log entries as CSV
///
/// Always emits the fixed column set; there is no column template.
#[api_v2_operation(
    summary = "Convert Logs to CSV",
    description = "Render log entries as CSV (timestamp, level, message, path, method, duration, status) as a file attachment.",
    tags("Export"),
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv"),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "CSV write failure")
    )
)]
pub async fn convert_to_csv(
    service: web::Data<AnalyticsService>,
    body: web::Json<Vec<LogEntry>>,
) -> Result<HttpResponse, Error> {
    let csv = service.convert_to_csv(&body)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={CSV_FILENAME}"),
        ))
        .body(csv))
}
