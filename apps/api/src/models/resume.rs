use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// Presentation defaults for resumes created by extraction.
pub const DEFAULT_TEMPLATE: &str = "classic";
pub const DEFAULT_ACCENT_COLOR: &str = "#3B82F6";

/// A persisted resume. Sub-documents are stored as JSONB and kept as raw
/// JSON values; `skills` is a text array.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Resume {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub title: String,
    pub professional_summary: String,
    pub personal_info: Value,
    pub skills: Vec<String>,
    pub experience: Value,
    pub education: Value,
    pub project: Value,
    pub template: String,
    pub accent_color: String,
    pub public: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// The content half of a resume, with every field present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeContent {
    pub professional_summary: String,
    pub personal_info: Map<String, Value>,
    pub skills: Vec<String>,
    pub experience: Vec<Value>,
    pub education: Vec<Value>,
    pub project: Vec<Value>,
}

impl Default for ResumeContent {
    fn default() -> Self {
        Self {
            professional_summary: String::new(),
            personal_info: Map::new(),
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            project: Vec::new(),
        }
    }
}

/// Everything needed to insert a resume row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResume {
    pub user_id: Uuid,
    pub title: String,
    pub content: ResumeContent,
    pub template: String,
    pub accent_color: String,
    pub public: bool,
}

impl NewResume {
    /// A private resume with the default template and accent color.
    pub fn with_defaults(user_id: Uuid, title: impl Into<String>, content: ResumeContent) -> Self {
        Self {
            user_id,
            title: title.into(),
            content,
            template: DEFAULT_TEMPLATE.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            public: false,
        }
    }

    /// Materializes the row as the store would return it.
    pub fn into_resume(self, id: Uuid, now: DateTime<Utc>) -> Resume {
        let NewResume {
            user_id,
            title,
            content,
            template,
            accent_color,
            public,
        } = self;
        Resume {
            id,
            user_id,
            title,
            professional_summary: content.professional_summary,
            personal_info: Value::Object(content.personal_info),
            skills: content.skills,
            experience: Value::Array(content.experience),
            education: Value::Array(content.education),
            project: Value::Array(content.project),
            template,
            accent_color,
            public,
            created_at: now,
            updated_at: now,
        }
    }
}
