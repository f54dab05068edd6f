//! Batch evaluation of both backends against a fixed question set.
//!
//! Each question is resolved to a player, sent to xAI and then Gemini, and each answer is
//! classified by keyword containment. The per-question log is written to a CSV that
//! [`summarize_results_file`](crate::metrics::summarize_results_file) can read back later.

pub mod dataset;
pub mod error;
pub mod runner;


pub use dataset::{TestCase, load_test_cases};
pub use error::{EvalError, EvalResult};
pub use runner::{EvaluationReport, EvaluationRow, Evaluator};

use std::path::Path;

use crate::assistant::AppContext;

/// Loads the question set, evaluates both backends and writes the results file.
pub async fn run_evaluation(
    ctx: &AppContext,
    test_dataset: &Path,
    results_path: &Path,
) -> EvalResult<EvaluationReport> {
    let cases = load_test_cases(test_dataset)?;
    let report = Evaluator::new(ctx).run(&cases).await;
    report.write_csv(results_path)?;
    Ok(report)
}
