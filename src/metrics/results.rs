use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::backend::BackendKind;
use crate::scoring::ClassificationLabel;

use super::error::MetricsError;
use super::summary::{EvaluationSummary, LabelCounts};

#[derive(Debug, Clone, PartialEq)]
/// Summary for one backend, labelled with the backend it describes.
pub struct BackendSummary {
    pub backend: BackendKind,
    pub summary: EvaluationSummary,
}

/// Recomputes per-backend scores from a previously written results file.
///
/// Returns `Ok(None)` if no evaluation has been run yet (the file does not exist). Backends whose
/// `<slug>_status` column is absent are skipped. The file records no timings, so latency is zero.
pub fn summarize_results_file(
    path: &Path,
    backends: &[BackendKind],
) -> Result<Option<Vec<BackendSummary>>, MetricsError> {
    if !path.exists() {
        return Ok(None);
    }

    let csv_err = |source| MetricsError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();

    let columns: Vec<(BackendKind, usize)> = backends
        .iter()
        .filter_map(|kind| {
            let column = kind.status_column();
            headers
                .iter()
                .position(|h| h.trim() == column)
                .map(|idx| (*kind, idx))
        })
        .collect();

    let mut counts = vec![LabelCounts::default(); columns.len()];
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        for ((kind, idx), tally) in columns.iter().zip(counts.iter_mut()) {
            match record.get(*idx).map(str::parse::<ClassificationLabel>) {
                Some(Ok(label)) => tally.record(label),
                _ => debug!(backend = %kind, "Skipping unrecognized status cell"),
            }
        }
    }

    let summaries = columns
        .into_iter()
        .zip(counts)
        .map(|((backend, _), counts)| BackendSummary {
            backend,
            summary: EvaluationSummary::from_counts(counts, Duration::ZERO),
        })
        .collect();

    Ok(Some(summaries))
}
