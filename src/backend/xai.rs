//! Grok via the OpenAI-compatible chat completions endpoint.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use super::error::{BackendError, BackendResult};
use super::prompt::system_prompt;
use super::{Backend, BackendKind};

const KIND: BackendKind = BackendKind::Xai;

pub struct XaiBackend {
    client: Option<Client<OpenAIConfig>>,
    model: String,
}

impl std::fmt::Debug for XaiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XaiBackend")
            .field("configured", &self.client.is_some())
            .field("model", &self.model)
            .finish()
    }
}

impl XaiBackend {
    /// Creates the backend. Without an API key every call answers with a missing-key message.
    pub fn new(api_key: Option<&str>, base_url: &str, model: &str) -> Self {
        let client = match api_key {
            Some(key) => {
                let config = OpenAIConfig::new()
                    .with_api_key(key)
                    .with_api_base(base_url);
                Some(Client::with_config(config))
            }
            None => {
                warn!("XAI_API_KEY not found in environment variables.");
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

    /// Builds the deterministic (temperature 0) system + user request.
    pub fn build_request(
        &self,
        user_query: &str,
        context: &str,
    ) -> BackendResult<CreateChatCompletionRequest> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_prompt(context))
            .build()
            .map_err(request_error)?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(user_query)
            .build()
            .map_err(request_error)?;

        CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([
                ChatCompletionRequestMessage::System(system),
                ChatCompletionRequestMessage::User(user),
            ])
            .temperature(0.0_f32)
            .build()
            .map_err(request_error)
    }
}

#[async_trait]
impl Backend for XaiBackend {
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

        let request = self.build_request(user_query, context)?;
        debug!(model = %self.model, "Calling xAI chat completion");

        let response = client.chat().create(request).await.map_err(request_error)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(BackendError::EmptyResponse { backend: KIND })
    }
}

fn request_error(e: impl std::fmt::Display) -> BackendError {
    BackendError::Request {
        backend: KIND,
        reason: e.to_string(),
    }
}
