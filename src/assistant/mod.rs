//! Per-turn chat pipeline and the application context it runs against.
//!
//! [`AppContext`] is built once at startup and passed by reference to the chat loop and the
//! evaluation runner. Nothing here is global.

pub mod session;
pub mod social;


pub use session::{Role, Session, Turn};
pub use social::SocialIntent;

use std::sync::Arc;

use tracing::{debug, info};

use crate::backend::{Backend, BackendKind, build_backends};
use crate::config::Config;
use crate::store::{PlayerRecord, RecordStore};

/// Reply used when no player can be resolved from the user's text.
pub const NOT_FOUND_REPLY: &str = "Üzgünüm, veritabanımda bu isimde bir oyuncu bulamadım veya sorunuzu anlayamadım. Ben sadece **futbolcu analizi** ve **scout** verileri üzerine uzmanlaşmış bir asistanım. Lütfen bir futbolcu ismi giriniz.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// How a reply was produced.
pub enum ReplySource {
    Social(SocialIntent),
    /// Generated by a backend for the resolved player.
    Generated {
        backend: BackendKind,
        player: PlayerRecord,
    },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    pub source: ReplySource,
}

/// Shared, read-only resources: the player table and both generation backends.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<RecordStore>,
    xai: Arc<dyn Backend>,
    gemini: Arc<dyn Backend>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("players", &self.store.len())
            .field("store_available", &self.store.is_available())
            .finish()
    }
}

impl AppContext {
    pub fn new(store: RecordStore, xai: Arc<dyn Backend>, gemini: Arc<dyn Backend>) -> Self {
        Self {
            store: Arc::new(store),
            xai,
            gemini,
        }
    }

    /// Loads the player table and builds the real backends.
    pub fn from_config(config: &Config) -> Self {
        let store = RecordStore::load(&config.players_path);
        let (xai, gemini) = build_backends(config);
        info!(
            players = store.len(),
            available = store.is_available(),
            "Application context ready"
        );
        Self::new(store, xai, gemini)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn backend(&self, kind: BackendKind) -> &Arc<dyn Backend> {
        match kind {
            BackendKind::Xai => &self.xai,
            BackendKind::Gemini => &self.gemini,
        }
    }

    /// Answers one chat turn.
    ///
    /// Small talk is answered directly. Otherwise the player is resolved from the text (mention
    /// scan, then name lookup) and the chosen backend phrases the answer; an unresolved player
    /// gets the fixed not-found reply without any backend call.
    pub async fn respond(&self, prompt: &str, kind: BackendKind) -> AssistantReply {
        if let Some(intent) = SocialIntent::detect(prompt) {
            debug!(?intent, "Social intent detected");
            return AssistantReply {
                text: intent.reply().to_string(),
                source: ReplySource::Social(intent),
            };
        }

        let Some(player) = self.store.resolve(prompt) else {
            debug!("No player resolved from prompt");
            return AssistantReply {
                text: NOT_FOUND_REPLY.to_string(),
                source: ReplySource::NotFound,
            };
        };

        let text = self
            .backend(kind)
            .generate(prompt, &player.context())
            .await;

        AssistantReply {
            text,
            source: ReplySource::Generated {
                backend: kind,
                player: player.clone(),
            },
        }
    }

    /// Like [`respond`](Self::respond), recording both turns in `session`.
    pub async fn chat(
        &self,
        session: &mut Session,
        prompt: &str,
        kind: BackendKind,
    ) -> AssistantReply {
        session.push_user(prompt);
        let reply = self.respond(prompt, kind).await;
        session.push_assistant(&reply.text);
        reply
    }
}
