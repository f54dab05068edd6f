//! Scout library crate (used by the `scout` binary and integration tests).
//!
//! # Modules
//!
//! - [`store`] - read-only player table with name lookup and mention scan
//! - [`backend`] - the two answer generators (xAI Grok, Google Gemini) behind one trait
//! - [`assistant`] - per-turn chat pipeline and the shared [`AppContext`]
//! - [`scoring`] - keyword classification of a generated answer
//! - [`metrics`] - precision/recall/F1 aggregation, also from a saved results file
//! - [`eval`] - batch evaluation of both backends over a question set
//! - [`config`] - environment-backed settings
//!
//! ## Test/Mock Support
//! [`MockBackend`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod assistant;
pub mod backend;
pub mod config;
pub mod constants;
pub mod eval;
pub mod metrics;
pub mod scoring;
pub mod store;

pub use assistant::{
    AppContext, AssistantReply, NOT_FOUND_REPLY, ReplySource, Role, Session, SocialIntent, Turn,
};
#[cfg(any(test, feature = "mock"))]
pub use backend::{MockBackend, MockCall};
pub use backend::{
    Backend, BackendError, BackendKind, BackendResult, GeminiBackend, XaiBackend, build_backend,
    build_backends,
};
pub use config::{Config, ConfigError};
pub use eval::{
    EvalError, EvaluationReport, EvaluationRow, Evaluator, TestCase, load_test_cases,
    run_evaluation,
};
pub use metrics::{
    BackendSummary, EvaluationSummary, LabelCounts, MetricsError, summarize,
    summarize_results_file,
};
pub use scoring::{ClassificationLabel, ExpectedValues, Intent, ScoringError, classify};
pub use store::{PlayerRecord, RecordStore, StoreError, load_players};
