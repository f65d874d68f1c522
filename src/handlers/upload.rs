//! Log file upload endpoint handler.

use crate::config::AppConfig;
use crate::error::AnalyticsError;
use crate::models::{LogEntry, UploadResponse};
use crate::services::{AnalyticsService, UploadStore};
use actix_multipart::Multipart;
use actix_web::{Error, Result, web};
use futures_util::StreamExt;
use tracing::{error, info, warn};

const FILE_FIELD: &str = "file";

struct UploadedFile {
    filename: Option<String>,
    contents: Vec<u8>,
}

/// Upload a JSON array of log entries as multipart field `file`.
///
/// The file is stored, read back from disk, decoded and run through the
/// same analysis as `POST /analyze/logs`.
pub async fn upload(
    config: web::Data<AppConfig>,
    service: web::Data<AnalyticsService>,
    store: web::Data<UploadStore>,
    payload: Multipart,
) -> Result<web::Json<UploadResponse>, Error> {
    let file = read_file_field(payload, config.max_payload_bytes).await?;
    info!(
        filename = file.filename.as_deref().unwrap_or("<none>"),
        bytes = file.contents.len(),
        "Upload received"
    );

    let path = store
        .save(file.filename.as_deref(), &file.contents)
        .await
        .map_err(|e| {
            error!(error = %e, dir = %store.dir().display(), "Failed to store upload");
            AnalyticsError::Storage(e)
        })?;

    let data = store.read(&path).await.map_err(AnalyticsError::Storage)?;
    let logs: Vec<LogEntry> = serde_json::from_slice(&data)
        .map_err(|e| AnalyticsError::InputValidation(format!("parse json err: {e}")))?;

    let analysis = service.analyze_logs(&logs).await?;

    Ok(web::Json(UploadResponse {
        message: "File successfully uploaded and analyzed".to_string(),
        analysis,
    }))
}

/// Collect the `file` field, skipping any other parts.
///
/// Fails once the field grows past `limit` bytes.
async fn read_file_field(
    mut payload: Multipart,
    limit: usize,
) -> Result<UploadedFile, AnalyticsError> {
    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AnalyticsError::InputValidation(format!("get form err: {e}")))?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let mut contents = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| AnalyticsError::InputValidation(format!("get form err: {e}")))?;
            if contents.len() + chunk.len() > limit {
                warn!(limit, "Upload exceeds payload limit");
                return Err(AnalyticsError::InputValidation(format!(
                    "get form err: file exceeds {limit} bytes"
                )));
            }
            contents.extend_from_slice(&chunk);
        }

        return Ok(UploadedFile { filename, contents });
    }

    Err(AnalyticsError::InputValidation(format!(
        "get form err: missing multipart field `{FILE_FIELD}`"
    )))
}
