//! Persistence seams for users and resumes.
//!
//! Handlers only see the `UserStore` / `ResumeStore` traits. `PgStore` is the
//! production implementation; tests run against `memory::InMemoryStore`.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::{NewResume, Resume};
use crate::models::user::{NewUser, User};

pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("A user with this email already exists")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `StoreError::DuplicateEmail` if the email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create_resume(&self, resume: NewResume) -> Result<Resume, StoreError>;
    /// Newest first.
    async fn list_resumes_by_owner(&self, user_id: Uuid) -> Result<Vec<Resume>, StoreError>;
    /// Returns `None` unless the resume exists and belongs to `user_id`.
    async fn find_resume(&self, id: Uuid, user_id: Uuid) -> Result<Option<Resume>, StoreError>;
}
