//! Axum route handler for the tailoring API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::tailor::{tailor_resume, ResumeUpload};

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub success: bool,
    pub tailored_resume: String,
}

/// Raw form contents, collected before any validation runs.
#[derive(Debug, Default)]
struct TailorForm {
    resume: Option<ResumeUpload>,
    job_description: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<TailorForm, AppError> {
    let mut form = TailorForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?;
                form.resume = Some(ResumeUpload { filename, content });
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?;
                form.job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// POST /api/tailor-resume
///
/// Multipart form: `resume` (file) and `job_description` (text).
/// Both fields are validated before the resume is extracted, so a request
/// without a job description never pays for extraction or a completion call.
pub async fn handle_tailor_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TailorResponse>, AppError> {
    let multipart =
        multipart.map_err(|_| AppError::Validation("No resume file uploaded".to_string()))?;
    let form = read_form(multipart).await?;

    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))?;
    let job_description = form
        .job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Job description is required".to_string()))?;

    let span = info_span!("tailor", request_id = %Uuid::new_v4(), filename = %resume.filename);

    async move {
        info!(
            "Tailoring resume against job description ({} characters)",
            job_description.chars().count()
        );
        let tailored_resume = tailor_resume(
            resume,
            &job_description,
            state.llm.as_ref(),
            state.config.prompt_style,
        )
        .await?;

        Ok::<_, AppError>(Json(TailorResponse {
            success: true,
            tailored_resume,
        }))
    }
    .instrument(span)
    .await
}
