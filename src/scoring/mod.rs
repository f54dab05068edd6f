//! Keyword-based answer classification.
//!
//! Given a backend's answer, the expected keywords for the question and the question's intent,
//! decide whether the answer is [`Correct`](ClassificationLabel::Correct),
//! [`Incorrect`](ClassificationLabel::Incorrect) or
//! [`Unanswered`](ClassificationLabel::Unanswered).
//!
//! Matching is literal, case-insensitive substring containment. It is meant for relative
//! comparison between backends, not calibrated accuracy.

pub mod error;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use scorer::classify;
pub use types::{ClassificationLabel, ExpectedValues, Intent};
