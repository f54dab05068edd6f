//! Text-generation backends.
//!
//! [`XaiBackend`] talks to Grok through the OpenAI-compatible chat API, [`GeminiBackend`] talks to
//! Gemini through `genai`. Both fail closed: [`Backend::generate`] always returns displayable
//! text, substituting an error message when the credential is missing or the call fails.

pub mod error;
pub mod factory;
pub mod gemini;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prompt;
pub mod xai;


pub use error::{BackendError, BackendResult};
pub use factory::{build_backend, build_backends};
pub use gemini::GeminiBackend;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBackend, MockCall};
pub use xai::XaiBackend;

use async_trait::async_trait;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The two generation providers compared by the evaluation.
pub enum BackendKind {
    /// xAI Grok.
    Xai,
    /// Google Gemini.
    Gemini,
}

impl BackendKind {
    /// Evaluation order.
    pub const ALL: [BackendKind; 2] = [BackendKind::Xai, BackendKind::Gemini];

    /// Human-readable provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BackendKind::Xai => "xAI",
            BackendKind::Gemini => "Gemini",
        }
    }

    /// Prefix used for this backend's columns in the results file.
    pub fn slug(&self) -> &'static str {
        match self {
            BackendKind::Xai => "xai",
            BackendKind::Gemini => "gemini",
        }
    }

    pub fn status_column(&self) -> String {
        format!("{}_status", self.slug())
    }

}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xai" | "grok" => Ok(Self::Xai),
            "gemini" | "google" => Ok(Self::Gemini),
            _ => Err(format!("Unknown backend: {}", s)),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[async_trait]
/// One hosted text-generation provider.
pub trait Backend: Send + Sync {
    /// Which provider this is.
    fn kind(&self) -> BackendKind;

    /// Model name sent with each request.
    fn model(&self) -> &str;

    /// Asks the provider to answer `user_query` using `context` (a rendered player record).
    async fn try_generate(&self, user_query: &str, context: &str) -> BackendResult<String>;

    /// Like [`try_generate`](Backend::try_generate), but converts any failure into the text
    /// shown to the user. Each call is attempted exactly once.
    async fn generate(&self, user_query: &str, context: &str) -> String {
        match self.try_generate(user_query, context).await {
            Ok(text) => text,
            Err(e) => {
                error!(backend = %self.kind(), model = self.model(), "Generation failed: {}", e);
                e.display_message()
            }
        }
    }
}
