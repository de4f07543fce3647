//! Session tokens, password hashing and the route guard.

pub mod middleware;
pub mod password;
pub mod token;

use thiserror::Error;

pub use middleware::{require_auth, AuthUser};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Token subject is not a user id")]
    InvalidSubject,

    #[error("Password hashing error: {0}")]
    Hash(String),
}
