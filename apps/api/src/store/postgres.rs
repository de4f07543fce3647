use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{NewResume, Resume};
use crate::models::user::{NewUser, User};
use crate::store::{ResumeStore, StoreError, UserStore};

/// PostgreSQL-backed store for both users and resumes.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_unique_violation(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Database(e),
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        info!("Created user {}", created.id);
        Ok(created)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}

#[async_trait]
impl ResumeStore for PgStore {
    async fn create_resume(&self, resume: NewResume) -> Result<Resume, StoreError> {
        let NewResume {
            user_id,
            title,
            content,
            template,
            accent_color,
            public,
        } = resume;

        let created = sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes
                (id, user_id, title, professional_summary, personal_info, skills,
                 experience, education, project, template, accent_color, public,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&title)
        .bind(&content.professional_summary)
        .bind(Value::Object(content.personal_info))
        .bind(&content.skills)
        .bind(Value::Array(content.experience))
        .bind(Value::Array(content.education))
        .bind(Value::Array(content.project))
        .bind(&template)
        .bind(&accent_color)
        .bind(public)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted resume {} for user {}", created.id, user_id);
        Ok(created)
    }

    async fn list_resumes_by_owner(&self, user_id: Uuid) -> Result<Vec<Resume>, StoreError> {
        Ok(sqlx::query_as::<_, Resume>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_resume(&self, id: Uuid, user_id: Uuid) -> Result<Option<Resume>, StoreError> {
        Ok(
            sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}
