use thiserror::Error;

use super::BackendKind;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{backend} API key is missing")]
    MissingApiKey { backend: BackendKind },

    #[error("{backend} request failed: {reason}")]
    Request {
        backend: BackendKind,
        reason: String,
    },

    #[error("{backend} returned an empty response")]
    EmptyResponse { backend: BackendKind },
}

impl BackendError {
    /// Text shown to the user in place of a generated answer.
    pub fn display_message(&self) -> String {
        match self {
            BackendError::MissingApiKey {
                backend: BackendKind::Xai,
            } => "Error: XAI API Key is missing. Please check your .env file.".to_string(),
            BackendError::MissingApiKey {
                backend: BackendKind::Gemini,
            } => "Error: Google API Key is missing.".to_string(),
            other => format!("Error generating response: {}", other),
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;
