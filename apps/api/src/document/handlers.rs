//! Axum route handler for DOCX download.

use axum::{
    extract::rejection::JsonRejection,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::document::format_resume;
use crate::errors::AppError;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOCX_FILENAME: &str = "tailored_resume.docx";

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// POST /api/download-docx
///
/// Renders `resume_text` into a formatted DOCX attachment. No document is
/// built when the text is missing or blank.
pub async fn handle_download_docx(
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let resume_text = payload
        .ok()
        .and_then(|Json(req)| req.resume_text)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No resume text provided".to_string()))?;

    let bytes = tokio::task::spawn_blocking(move || format_resume(&resume_text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in formatter: {e}")))??;

    info!("Generated DOCX ({} bytes)", bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOCX_FILENAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
