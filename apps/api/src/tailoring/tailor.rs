//! Tailoring orchestration, independent of the HTTP layer.

use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_text, FileKind};
use crate::llm_client::CompletionProvider;
use crate::tailoring::prompts::{build_prompt, PromptStyle};

/// An uploaded resume. Used once per request, never retained.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub content: Bytes,
}

/// Extracts the resume text on the blocking pool.
pub async fn extract_upload(upload: ResumeUpload) -> Result<String, AppError> {
    let kind = FileKind::from_filename(&upload.filename)?;
    info!(
        "Extracting {} resume ({} bytes)",
        kind.as_str(),
        upload.content.len()
    );

    let text = tokio::task::spawn_blocking(move || extract_text(&upload.content, &upload.filename))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))??;

    info!("Extracted {} characters", text.chars().count());
    Ok(text)
}

/// Full pipeline for one request. The job description must already be validated.
pub async fn tailor_resume(
    upload: ResumeUpload,
    job_description: &str,
    llm: &dyn CompletionProvider,
    style: PromptStyle,
) -> Result<String, AppError> {
    let resume_text = extract_upload(upload).await?;
    let prompt = build_prompt(&resume_text, job_description, style);

    let tailored = llm.complete(prompt.system, &prompt.user).await?;

    info!("Completion returned {} characters", tailored.chars().count());
    Ok(tailored)
}
