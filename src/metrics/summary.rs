use std::time::Duration;

use serde::Serialize;

use crate::constants::round_for_display;
use crate::scoring::ClassificationLabel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Per-label tallies for one backend.
pub struct LabelCounts {
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
}

impl LabelCounts {
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a ClassificationLabel>,
    {
        let mut counts = Self::default();
        for label in labels {
            counts.record(*label);
        }
        counts
    }

    pub fn record(&mut self, label: ClassificationLabel) {
        match label {
            ClassificationLabel::Correct => self.correct += 1,
            ClassificationLabel::Incorrect => self.incorrect += 1,
            ClassificationLabel::Unanswered => self.unanswered += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.correct + self.incorrect + self.unanswered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Aggregate scores for one backend over an evaluation run.
pub struct EvaluationSummary {
    /// `correct / (correct + incorrect)`: how often an answer that was given is right.
    pub precision: f64,
    /// `correct / (correct + unanswered)`.
    pub recall: f64,
    pub f1: f64,
    /// Mean wall-clock time per question.
    pub average_latency: Duration,
    pub counts: LabelCounts,
}

impl EvaluationSummary {
    /// Computes precision, recall and F1 from label tallies. Zero denominators yield `0.0`.
    pub fn from_counts(counts: LabelCounts, average_latency: Duration) -> Self {
        let precision = ratio(counts.correct, counts.correct + counts.incorrect);
        let recall = ratio(counts.correct, counts.correct + counts.unanswered);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            precision,
            recall,
            f1,
            average_latency,
            counts,
        }
    }

    /// Returns a copy with the ratios rounded for display.
    pub fn rounded(&self) -> Self {
        Self {
            precision: round_for_display(self.precision),
            recall: round_for_display(self.recall),
            f1: round_for_display(self.f1),
            ..*self
        }
    }

    /// Average latency in seconds, rounded for display.
    pub fn average_latency_secs(&self) -> f64 {
        round_for_display(self.average_latency.as_secs_f64())
    }
}

impl std::fmt::Display for EvaluationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "precision={:.2} recall={:.2} f1={:.2} avg_time={:.2}s TP={} FP={} FN={}",
            self.precision,
            self.recall,
            self.f1,
            self.average_latency.as_secs_f64(),
            self.counts.correct,
            self.counts.incorrect,
            self.counts.unanswered
        )
    }
}

/// Aggregates per-question labels and latencies into an [`EvaluationSummary`].
///
/// Pure: the same inputs always produce the same summary.
pub fn summarize(labels: &[ClassificationLabel], latencies: &[Duration]) -> EvaluationSummary {
    let counts = LabelCounts::from_labels(labels);
    EvaluationSummary::from_counts(counts, mean_latency(latencies))
}

fn mean_latency(latencies: &[Duration]) -> Duration {
    if latencies.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = latencies.iter().sum();
    total.div_f64(latencies.len() as f64)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
