//! Resume extraction: unstructured text → AI call → repair → parse → defaults.
//!
//! Flow: build prompt → TextGenerator (2000-token budget) →
//!       repair_truncated_json → serde_json parse → normalize_extraction.
//! The AI call is never retried; a parse failure is reported to the caller
//! with the raw model output logged.

pub mod handlers;
pub mod prompts;
pub mod repair;
pub mod schema;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, TextGenerator};
use crate::models::resume::ResumeContent;
use prompts::{extraction_system, EXTRACTION_PROMPT};
use repair::repair_truncated_json;
use schema::normalize_extraction;

/// Structured output is much longer than a rewritten paragraph.
pub const EXTRACTION_MAX_TOKENS: u32 = 2000;

pub const UPLOAD_FAILED: &str = "Failed to upload resume. Please try again.";
pub const PARSE_FAILED: &str = "Failed to parse resume data. Please try uploading again.";

/// Asks the model for structured resume data and coerces the answer into
/// `ResumeContent`.
pub async fn extract_resume(
    llm: &dyn TextGenerator,
    resume_text: &str,
) -> Result<ResumeContent, AppError> {
    let prompt = EXTRACTION_PROMPT.replace("{resume_text}", resume_text);
    let system = extraction_system();

    let raw = llm
        .complete(
            CompletionRequest::new(&prompt)
                .system(&system)
                .max_tokens(EXTRACTION_MAX_TOKENS),
        )
        .await
        .map_err(|e| AppError::upstream(UPLOAD_FAILED, e))?;

    let parsed = parse_model_output(&raw)?;
    Ok(normalize_extraction(parsed))
}

/// Repairs and parses raw model output.
pub fn parse_model_output(raw: &str) -> Result<Value, AppError> {
    let repaired = repair_truncated_json(raw);
    debug!(
        "Cleaned data: {}...",
        repaired.chars().take(200).collect::<String>()
    );

    match serde_json::from_str(&repaired) {
        Ok(value) => {
            info!("Successfully parsed extraction JSON");
            Ok(value)
        }
        Err(e) => {
            error!("Failed to parse AI response: {raw}");
            Err(AppError::Processing {
                message: PARSE_FAILED.to_string(),
                detail: e.to_string(),
            })
        }
    }
}
