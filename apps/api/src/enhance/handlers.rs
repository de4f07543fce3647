//! Axum route handlers for the enhancement API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhance::{
    job_description_prompt, run_enhancement, summary_prompt, JOB_DESC_FAILED, SUMMARY_FAILED,
};
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhanceSummaryRequest {
    pub user_content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhanceJobDescRequest {
    pub user_content: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub success: bool,
    pub improved_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/enhance-pro-sum
pub async fn handle_enhance_summary(
    State(state): State<AppState>,
    AppJson(request): AppJson<EnhanceSummaryRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let prompt = summary_prompt(request.user_content.as_deref())?;
    let improved_text = run_enhancement(state.llm.as_ref(), &prompt, SUMMARY_FAILED).await?;

    Ok(Json(EnhanceResponse {
        success: true,
        improved_text,
    }))
}

/// POST /api/ai/enhance-job-desc
pub async fn handle_enhance_job_desc(
    State(state): State<AppState>,
    AppJson(request): AppJson<EnhanceJobDescRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let prompt = job_description_prompt(
        request.user_content.as_deref(),
        request.job_title.as_deref(),
        request.company.as_deref(),
    )?;
    let improved_text = run_enhancement(state.llm.as_ref(), &prompt, JOB_DESC_FAILED).await?;

    Ok(Json(EnhanceResponse {
        success: true,
        improved_text,
    }))
}
