//! Aggregation of per-question labels into precision/recall/F1.
//!
//! The formulas borrow binary-classification names but count answer quality, not a
//! positive/negative class: precision is "right when it answered", recall is "answered
//! correctly out of everything it should have known".

pub mod error;
pub mod results;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::MetricsError;
pub use results::{BackendSummary, summarize_results_file};
pub use summary::{EvaluationSummary, LabelCounts, summarize};
