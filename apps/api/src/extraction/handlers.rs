//! Axum route handler for resume upload.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::extraction::{extract_resume, UPLOAD_FAILED};
use crate::models::resume::NewResume;
use crate::state::AppState;

pub const MISSING_UPLOAD_FIELDS: &str = "Resume text and title are required";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadResumeRequest {
    pub resume_text: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResumeResponse {
    pub success: bool,
    pub resume_id: Uuid,
    pub message: String,
}

/// POST /api/ai/upload-resume
///
/// Extracts structured data from pasted resume text and stores it as a new
/// private resume owned by the caller.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    AppJson(request): AppJson<UploadResumeRequest>,
) -> Result<(StatusCode, Json<UploadResumeResponse>), AppError> {
    let (resume_text, title) = match (request.resume_text, request.title) {
        (Some(text), Some(title)) if !text.trim().is_empty() && !title.trim().is_empty() => {
            (text, title)
        }
        _ => return Err(AppError::Validation(MISSING_UPLOAD_FIELDS.to_string())),
    };

    let content = extract_resume(state.llm.as_ref(), &resume_text).await?;

    let resume = state
        .resumes
        .create_resume(NewResume::with_defaults(user.user_id, title, content))
        .await
        .map_err(|e| {
            error!("Failed to store extracted resume: {e}");
            AppError::Processing {
                message: UPLOAD_FAILED.to_string(),
                detail: e.to_string(),
            }
        })?;

    info!("Resume created with ID: {}", resume.id);

    Ok((
        StatusCode::CREATED,
        Json(UploadResumeResponse {
            success: true,
            resume_id: resume.id,
            message: "Resume uploaded and parsed successfully".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::extraction::{EXTRACTION_MAX_TOKENS, PARSE_FAILED};
    use crate::models::resume::{DEFAULT_ACCENT_COLOR, DEFAULT_TEMPLATE};
    use crate::test_support::{MockLlm, TestApp};

    use super::MISSING_UPLOAD_FIELDS;

    const TWO_LINE_RESUME: &str = "Jane Doe, Backend Engineer\nAcme Corp 2019-2024: built billing APIs";

    const EXTRACTED: &str = r#"```json
{
  "professional_summary": "Backend engineer",
  "personal_info": { "full_name": "Jane Doe", "profession": "Backend Engineer" },
  "experience": [
    { "company": "Acme Corp", "position": "Engineer", "start_date": "2019", "end_date": "2024", "description": "Built billing APIs", "is_current": false }
  ]
}
```"#;

    #[tokio::test]
    async fn test_upload_creates_private_classic_resume_for_caller() {
        let llm = Arc::new(MockLlm::replying(EXTRACTED));
        let app = TestApp::new(llm.clone());
        let user_id = Uuid::new_v4();
        let token = app.token_for(user_id);

        let (status, body) = app
            .post(
                "/api/ai/upload-resume",
                Some(&token),
                json!({ "resumeText": TWO_LINE_RESUME, "title": "My Resume" }),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        let resume_id: Uuid = body["resumeId"].as_str().unwrap().parse().unwrap();

        let stored = app.store.all_resumes();
        assert_eq!(stored.len(), 1);
        let resume = &stored[0];
        assert_eq!(resume.id, resume_id);
        assert_eq!(resume.user_id, user_id);
        assert_eq!(resume.title, "My Resume");
        assert_eq!(resume.template, DEFAULT_TEMPLATE);
        assert_eq!(resume.accent_color, DEFAULT_ACCENT_COLOR);
        assert!(!resume.public);
        assert_eq!(resume.personal_info["full_name"], "Jane Doe");
        assert_eq!(resume.experience[0]["company"], "Acme Corp");
        // Absent from the model output, so defaulted.
        assert!(resume.skills.is_empty());
        assert_eq!(resume.education, json!([]));
        assert_eq!(resume.project, json!([]));

        assert_eq!(llm.last_call().unwrap().max_tokens, EXTRACTION_MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_upload_then_fetch_round_trips() {
        let llm = Arc::new(MockLlm::replying(EXTRACTED));
        let app = TestApp::new(llm);
        let token = app.token_for(Uuid::new_v4());

        let (_, created) = app
            .post(
                "/api/ai/upload-resume",
                Some(&token),
                json!({ "resumeText": TWO_LINE_RESUME, "title": "My Resume" }),
            )
            .await;
        let resume_id = created["resumeId"].as_str().unwrap();

        let (status, fetched) = app
            .get(&format!("/api/resumes/{resume_id}"), Some(&token))
            .await;

        assert_eq!(status, StatusCode::OK);
        let stored = serde_json::to_value(&app.store.all_resumes()[0]).unwrap();
        assert_eq!(fetched["resume"], stored);
        assert_eq!(fetched["resume"]["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_truncated_output_is_repaired_and_stored() {
        let llm = Arc::new(MockLlm::replying(
            r#"{"professional_summary": "Engineer", "skills": ["Rust"], "personal_info": {"full_name": "Jane""#,
        ));
        let app = TestApp::new(llm);
        let token = app.token_for(Uuid::new_v4());

        let (status, _) = app
            .post(
                "/api/ai/upload-resume",
                Some(&token),
                json!({ "resumeText": TWO_LINE_RESUME, "title": "CV" }),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        let resume = &app.store.all_resumes()[0];
        assert_eq!(resume.skills, vec!["Rust".to_string()]);
        assert_eq!(resume.personal_info["full_name"], "Jane");
    }

    #[tokio::test]
    async fn test_unparseable_output_is_500_and_not_retried() {
        let llm = Arc::new(MockLlm::replying(r#"{"skills": ["Rust", "SQL""#));
        let app = TestApp::new(llm.clone());
        let token = app.token_for(Uuid::new_v4());

        let (status, body) = app
            .post(
                "/api/ai/upload-resume",
                Some(&token),
                json!({ "resumeText": TWO_LINE_RESUME, "title": "CV" }),
            )
            .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], PARSE_FAILED);
        assert!(body["error"].is_string());
        assert_eq!(llm.call_count(), 1);
        assert_eq!(app.store.resume_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected() {
        let llm = Arc::new(MockLlm::replying("{}"));
        let app = TestApp::new(llm.clone());
        let token = app.token_for(Uuid::new_v4());

        for body in [
            json!({ "resumeText": TWO_LINE_RESUME }),
            json!({ "title": "CV" }),
            json!({ "resumeText": "", "title": "CV" }),
            json!({ "resumeText": TWO_LINE_RESUME, "title": "  " }),
        ] {
            let (status, response) = app.post("/api/ai/upload-resume", Some(&token), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["message"], MISSING_UPLOAD_FIELDS);
        }
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_requires_authentication() {
        let llm = Arc::new(MockLlm::replying("{}"));
        let app = TestApp::new(llm.clone());

        let (status, body) = app
            .post(
                "/api/ai/upload-resume",
                None,
                json!({ "resumeText": TWO_LINE_RESUME, "title": "CV" }),
            )
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_gateway_failure_persists_nothing() {
        let llm = Arc::new(MockLlm::failing(500, "upstream exploded"));
        let app = TestApp::new(llm);
        let token = app.token_for(Uuid::new_v4());

        let (status, body) = app
            .post(
                "/api/ai/upload-resume",
                Some(&token),
                json!({ "resumeText": TWO_LINE_RESUME, "title": "CV" }),
            )
            .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("upstream exploded"));
        assert_eq!(app.store.resume_count(), 0);
    }
}
