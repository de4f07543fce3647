//! Axum route handlers for accounts: register, login, profile and the
//! caller's resume list.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::issue_token;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::models::resume::Resume;
use crate::models::user::{normalize_email, NewUser, User};
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<Resume>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn session_token(state: &AppState, user: &User) -> Result<String, AppError> {
    issue_token(user.id, &state.config.jwt_secret, state.config.jwt_expiry_days)
        .map_err(|e| AppError::Internal(e.into()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/users/register
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let (Some(name), Some(email), Some(password)) = (
        non_blank(request.name),
        non_blank(request.email),
        non_blank(request.password),
    ) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let password_hash = hash_password(&password).map_err(|e| AppError::Internal(e.into()))?;
    let user = state
        .users
        .create_user(NewUser {
            name: name.trim().to_string(),
            email: normalize_email(&email),
            password_hash,
        })
        .await?;

    let token = session_token(&state, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            token,
            user,
        }),
    ))
}

/// POST /api/users/login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let invalid = || AppError::Validation(INVALID_CREDENTIALS.to_string());

    let email = non_blank(request.email).ok_or_else(invalid)?;
    let password = request.password.unwrap_or_default();

    let user = state
        .users
        .find_user_by_email(&normalize_email(&email))
        .await?
        .ok_or_else(invalid)?;

    let matches =
        verify_password(&password, &user.password_hash).map_err(|e| AppError::Internal(e.into()))?;
    if !matches {
        return Err(invalid());
    }

    let token = session_token(&state, &user)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user,
    }))
}

/// GET /api/users/data
pub async fn handle_get_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users
        .find_user_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse { user }))
}

/// GET /api/users/resumes
pub async fn handle_get_user_resumes(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.resumes.list_resumes_by_owner(auth.user_id).await?;
    Ok(Json(ResumeListResponse { resumes }))
}
