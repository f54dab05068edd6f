use std::sync::RwLock;

use async_trait::async_trait;

use super::error::{BackendError, BackendResult};
use super::{Backend, BackendKind};

/// Model name every mock reports.
pub const MOCK_MODEL: &str = "mock";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One recorded `try_generate` invocation.
pub struct MockCall {
    pub user_query: String,
    pub context: String,
}

/// Scripted backend for tests. Replies are chosen by the first matching query substring,
/// then the default reply, then `"Mock response for: <query>"`.
pub struct MockBackend {
    kind: BackendKind,
    default_reply: Option<String>,
    rules: Vec<(String, String)>,
    failure: Option<String>,
    calls: RwLock<Vec<MockCall>>,
}

impl MockBackend {
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            default_reply: None,
            rules: Vec::new(),
            failure: None,
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.default_reply = Some(reply.to_string());
        self
    }

    pub fn when_query_contains(mut self, needle: &str, reply: &str) -> Self {
        self.rules.push((needle.to_lowercase(), reply.to_string()));
        self
    }

    /// Every call fails with a request error carrying `reason`.
    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().expect("lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().expect("lock poisoned").len()
    }
}

#[async_trait]
impl Backend for MockBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn model(&self) -> &str {
        MOCK_MODEL
    }

    async fn try_generate(&self, user_query: &str, context: &str) -> BackendResult<String> {
        self.calls.write().expect("lock poisoned").push(MockCall {
            user_query: user_query.to_string(),
            context: context.to_string(),
        });

        if let Some(reason) = &self.failure {
            return Err(BackendError::Request {
                backend: self.kind,
                reason: reason.clone(),
            });
        }

        let lowered = user_query.to_lowercase();
        let reply = self
            .rules
            .iter()
            .find(|(needle, _)| lowered.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone())
            .or_else(|| self.default_reply.clone())
            .unwrap_or_else(|| format!("Mock response for: {}", user_query));

        Ok(reply)
    }
}
