//! Axum route handlers for reading stored resumes.

use axum::{extract::State, Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extractors::AppPath;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeDetailResponse {
    pub resume: Resume,
}

/// GET /api/resumes/:id
///
/// Only the owner can read a resume; anyone else gets 404.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    AppPath(resume_id): AppPath<Uuid>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let resume = state
        .resumes
        .find_resume(resume_id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    Ok(Json(ResumeDetailResponse { resume }))
}
