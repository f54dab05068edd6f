use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::assistant::AppContext;
use crate::backend::BackendKind;
use crate::constants::{NO_DATA_CONTEXT, NO_DATA_RESPONSE};
use crate::metrics::{BackendSummary, summarize};
use crate::scoring::{ClassificationLabel, classify};

use super::dataset::TestCase;
use super::error::{EvalError, EvalResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One line of the results file.
pub struct EvaluationRow {
    pub question: String,
    pub intent: String,
    pub expected_team: String,
    pub xai_response: String,
    pub xai_status: ClassificationLabel,
    pub gemini_response: String,
    pub gemini_status: ClassificationLabel,
}

impl EvaluationRow {
    pub fn response(&self, kind: BackendKind) -> &str {
        match kind {
            BackendKind::Xai => &self.xai_response,
            BackendKind::Gemini => &self.gemini_response,
        }
    }

    pub fn status(&self, kind: BackendKind) -> ClassificationLabel {
        match kind {
            BackendKind::Xai => self.xai_status,
            BackendKind::Gemini => self.gemini_status,
        }
    }
}

#[derive(Debug, Clone)]
/// Output of one evaluation run.
pub struct EvaluationReport {
    /// One entry per backend, in [`BackendKind::ALL`] order.
    pub summaries: Vec<BackendSummary>,
    /// One entry per test question, in dataset order.
    pub rows: Vec<EvaluationRow>,
}

impl EvaluationReport {
    pub fn summary(&self, kind: BackendKind) -> Option<&BackendSummary> {
        self.summaries.iter().find(|s| s.backend == kind)
    }

    /// Writes the per-question rows to `path`, replacing any existing file.
    pub fn write_csv(&self, path: &Path) -> EvalResult<()> {
        let csv_err = |source| EvalError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
        for row in &self.rows {
            writer.serialize(row).map_err(csv_err)?;
        }
        writer.flush().map_err(|source| EvalError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), rows = self.rows.len(), "Evaluation results written");
        Ok(())
    }
}

#[derive(Debug, Default)]
struct BackendTally {
    labels: Vec<ClassificationLabel>,
    latencies: Vec<Duration>,
}

/// Runs the question set against both backends of an [`AppContext`].
pub struct Evaluator<'a> {
    ctx: &'a AppContext,
}

impl<'a> Evaluator<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx }
    }

    /// Evaluates every case. Backends are called one at a time, xAI then Gemini, per question.
    ///
    /// When no player resolves for a question, no backend is called and each records the fixed
    /// no-data response (still timed, so the latency average covers every question).
    pub async fn run(&self, cases: &[TestCase]) -> EvaluationReport {
        info!(questions = cases.len(), "Running evaluation");

        let mut xai_tally = BackendTally::default();
        let mut gemini_tally = BackendTally::default();
        let mut rows = Vec::with_capacity(cases.len());

        for (idx, case) in cases.iter().enumerate() {
            let context = self.ctx.store().resolve(&case.question).map(|p| p.context());
            debug!(
                question = idx + 1,
                context = context.as_deref().unwrap_or(NO_DATA_CONTEXT),
                "Evaluating question"
            );

            let (xai_response, xai_status) = self
                .evaluate_backend(BackendKind::Xai, case, context.as_deref(), &mut xai_tally)
                .await;
            let (gemini_response, gemini_status) = self
                .evaluate_backend(
                    BackendKind::Gemini,
                    case,
                    context.as_deref(),
                    &mut gemini_tally,
                )
                .await;

            rows.push(EvaluationRow {
                question: case.question.clone(),
                intent: case.intent.to_string(),
                expected_team: case.expected.team.clone(),
                xai_response,
                xai_status,
                gemini_response,
                gemini_status,
            });
        }

        let summaries = [
            (BackendKind::Xai, xai_tally),
            (BackendKind::Gemini, gemini_tally),
        ]
        .into_iter()
        .map(|(backend, tally)| {
            let summary = summarize(&tally.labels, &tally.latencies);
            info!(backend = %backend, %summary, "Backend evaluated");
            BackendSummary { backend, summary }
        })
        .collect();

        EvaluationReport { summaries, rows }
    }

    async fn evaluate_backend(
        &self,
        kind: BackendKind,
        case: &TestCase,
        context: Option<&str>,
        tally: &mut BackendTally,
    ) -> (String, ClassificationLabel) {
        let started = Instant::now();
        let response = match context {
            Some(context) => {
                self.ctx
                    .backend(kind)
                    .generate(&case.question, context)
                    .await
            }
            None => NO_DATA_RESPONSE.to_string(),
        };
        tally.latencies.push(started.elapsed());

        let label = classify(&response, &case.expected, &case.intent);
        tally.labels.push(label);
        (response, label)
    }
}
