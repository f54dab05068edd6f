use std::sync::Arc;

use crate::config::Config;

use super::{Backend, BackendKind, GeminiBackend, XaiBackend};

/// Builds the real backend for `kind` from configuration.
pub fn build_backend(kind: BackendKind, config: &Config) -> Arc<dyn Backend> {
    match kind {
        BackendKind::Xai => Arc::new(XaiBackend::new(
            config.xai_api_key.as_deref(),
            &config.xai_base_url,
            &config.xai_model,
        )),
        BackendKind::Gemini => Arc::new(GeminiBackend::new(
            config.google_api_key.as_deref(),
            &config.gemini_model,
        )),
    }
}

/// Builds both backends, in [`BackendKind::ALL`] order.
pub fn build_backends(config: &Config) -> (Arc<dyn Backend>, Arc<dyn Backend>) {
    (
        build_backend(BackendKind::Xai, config),
        build_backend(BackendKind::Gemini, config),
    )
}
