//! Gemini via `genai`.

use async_trait::async_trait;
use genai::chat::{ChatMessage, ChatRequest};
use genai::resolver::{self, AuthData, AuthResolver};
use genai::{Client, ModelIden};
use tracing::{debug, warn};

use super::error::{BackendError, BackendResult};
use super::prompt::single_prompt;
use super::{Backend, BackendKind};

const KIND: BackendKind = BackendKind::Gemini;

pub struct GeminiBackend {
    client: Option<Client>,
    model: String,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("configured", &self.client.is_some())
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiBackend {
    /// Creates the backend. Without an API key every call answers with a missing-key message.
    ///
    /// The key is handed to `genai` explicitly so `GOOGLE_API_KEY` works without also exporting
    /// `GEMINI_API_KEY`.
    pub fn new(api_key: Option<&str>, model: &str) -> Self {
        let client = match api_key {
            Some(key) => {
                let key = key.to_string();
                let auth_resolver = AuthResolver::from_resolver_fn(
                    move |_model_iden: ModelIden| -> Result<Option<AuthData>, resolver::Error> {
                        Ok(Some(AuthData::from_single(key.clone())))
                    },
                );
                Some(Client::builder().with_auth_resolver(auth_resolver).build())
            }
            None => {
                warn!("GOOGLE_API_KEY not found in environment variables.");
                None
            }
        };

        Self {
            client,
            model: model.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn build_request(&self, user_query: &str, context: &str) -> ChatRequest {
        ChatRequest::new(vec![ChatMessage::user(single_prompt(user_query, context))])
    }
}

#[async_trait]
impl Backend for GeminiBackend {
    fn kind(&self) -> BackendKind {
        KIND
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn try_generate(&self, user_query: &str, context: &str) -> BackendResult<String> {
        let client = self
            .client
            .as_ref()
            .ok_or(BackendError::MissingApiKey { backend: KIND })?;

        let request = self.build_request(user_query, context);
        debug!(model = %self.model, "Calling Gemini generate");

        let response = client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| BackendError::Request {
                backend: KIND,
                reason: e.to_string(),
            })?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or(BackendError::EmptyResponse { backend: KIND })
    }
}
