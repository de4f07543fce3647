//! Test doubles and request helpers shared by handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use crate::auth::token::issue_token;
use crate::config::Config;
use crate::llm_client::{CompletionRequest, LlmError, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::InMemoryStore;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub system: Option<String>,
    pub max_tokens: u32,
}

/// Scripted `TextGenerator` that records every call.
pub struct MockLlm {
    reply: Result<String, (u16, String)>,
    calls: AtomicUsize,
    last: Mutex<Option<RecordedCall>>,
}

impl MockLlm {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::with_reply(Err((status, message.to_string())))
    }

    fn with_reply(reply: Result<String, (u16, String)>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockLlm {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(RecordedCall {
            prompt: request.prompt.to_string(),
            system: request.system.map(str::to_string),
            max_tokens: request.max_tokens,
        });
        match &self.reply {
            Ok(text) => Ok(text.trim().to_string()),
            Err((status, message)) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub config: Config,
}

impl TestApp {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        let config = Config::test_default();
        let store = Arc::new(InMemoryStore::default());
        let state = AppState {
            users: store.clone(),
            resumes: store.clone(),
            llm,
            config: config.clone(),
        };
        Self {
            router: build_router(state),
            store,
            config,
        }
    }

    pub fn token_for(&self, user_id: Uuid) -> String {
        issue_token(user_id, &self.config.jwt_secret, 7).unwrap()
    }

    /// Sends a request and returns the status with the body parsed as JSON
    /// (`Value::Null` when the body is empty or not JSON).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }
}
