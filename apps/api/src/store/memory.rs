//! In-process store used by the test suite.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::resume::{NewResume, Resume};
use crate::models::user::{NewUser, User};
use crate::store::{ResumeStore, StoreError, UserStore};

#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<HashMap<Uuid, User>>,
    resumes: Mutex<Vec<Resume>>,
}

impl InMemoryStore {
    pub fn resume_count(&self) -> usize {
        self.resumes.lock().unwrap().len()
    }

    pub fn all_resumes(&self) -> Vec<Resume> {
        self.resumes.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}

#[async_trait]
impl ResumeStore for InMemoryStore {
    async fn create_resume(&self, resume: NewResume) -> Result<Resume, StoreError> {
        let created = resume.into_resume(Uuid::new_v4(), Utc::now());
        self.resumes.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_resumes_by_owner(&self, user_id: Uuid) -> Result<Vec<Resume>, StoreError> {
        let resumes = self.resumes.lock().unwrap();
        // Insertion order is creation order; reverse for newest first.
        Ok(resumes
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_resume(&self, id: Uuid, user_id: Uuid) -> Result<Option<Resume>, StoreError> {
        let resumes = self.resumes.lock().unwrap();
        Ok(resumes
            .iter()
            .find(|r| r.id == id && r.user_id == user_id)
            .cloned())
    }
}
