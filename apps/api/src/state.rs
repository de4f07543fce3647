use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::store::{ResumeStore, UserStore};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is an immutable handle; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub resumes: Arc<dyn ResumeStore>,
    /// Completion gateway. Production: `LlmClient`.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
