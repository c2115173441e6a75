//! Application generation: one model call, then segmentation.
//!
//! Flow: validate inputs → `ApplicationWriter::write` → `segment` → response.
//! The writer is a trait so the HTTP layer and tests never depend on a live provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::prompts::{GENERATION_PROMPT_TEMPLATE, GENERATION_SYSTEM};
use crate::generation::segmenter::{segment, SegmentedApplication};
use crate::llm_client::LlmClient;

pub const MISSING_JOB_DESCRIPTION: &str = "Job description is required";
pub const MISSING_RESUME: &str = "Your resume is required";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces the raw combined cover-letter-and-resume text for a job posting and a resume.
///
/// Carried in `AppState` as `Arc<dyn ApplicationWriter>`.
#[async_trait]
pub trait ApplicationWriter: Send + Sync {
    async fn write(&self, job_description: &str, resume_text: &str) -> Result<String, AppError>;
}

/// Default writer backed by the Claude API.
pub struct LlmApplicationWriter {
    llm: LlmClient,
}

impl LlmApplicationWriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ApplicationWriter for LlmApplicationWriter {
    async fn write(&self, job_description: &str, resume_text: &str) -> Result<String, AppError> {
        let prompt = build_generation_prompt(job_description, resume_text);
        let response = self
            .llm
            .call(&prompt, GENERATION_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Application generation failed: {e}")))?;

        // An empty reply is not an error here; segmentation turns it into two empty fields.
        Ok(response.text().unwrap_or_default().to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub user_resume: Option<String>,
}

/// Validates the request, asks the writer for text, and segments the reply.
pub async fn generate_application(
    writer: &dyn ApplicationWriter,
    request: &GenerateRequest,
) -> Result<SegmentedApplication, AppError> {
    let job_description = non_blank(request.job_description.as_deref())
        .ok_or_else(|| AppError::Validation(MISSING_JOB_DESCRIPTION.to_string()))?;
    let resume_text = non_blank(request.user_resume.as_deref())
        .ok_or_else(|| AppError::Validation(MISSING_RESUME.to_string()))?;

    info!(
        job_description_len = job_description.len(),
        resume_len = resume_text.len(),
        "Generating application"
    );

    let raw = writer.write(job_description, resume_text).await?;
    debug!("Raw model response: {raw}");

    let application = segment(&raw);
    info!(
        cover_letter_len = application.cover_letter.len(),
        resume_len = application.resume_snippet.len(),
        "Application segmented"
    );

    Ok(application)
}

pub fn build_generation_prompt(job_description: &str, resume_text: &str) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{user_resume}", resume_text)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
