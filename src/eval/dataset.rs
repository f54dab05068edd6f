use std::path::Path;

use serde::Deserialize;

use crate::constants::DEFAULT_INTENT;
use crate::scoring::{ExpectedValues, Intent};

use super::error::{EvalError, EvalResult};

/// Columns a test dataset must have. `intent` may be absent and defaults to `General`.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "question",
    "expected_team",
    "expected_position",
    "expected_player",
];

#[derive(Debug, Default, Deserialize)]
struct TestRow {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    intent: Option<String>,
    #[serde(default)]
    expected_team: Option<String>,
    #[serde(default)]
    expected_position: Option<String>,
    #[serde(default)]
    expected_player: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One evaluation question with its scoring ground truth.
pub struct TestCase {
    pub question: String,
    pub intent: Intent,
    pub expected: ExpectedValues,
}

impl From<TestRow> for TestCase {
    fn from(row: TestRow) -> Self {
        let intent = row
            .intent
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| DEFAULT_INTENT.to_string());

        Self {
            question: row.question.unwrap_or_default(),
            intent: Intent::from(intent.as_str()),
            expected: ExpectedValues::new(
                row.expected_team.as_deref().unwrap_or_default(),
                row.expected_position.as_deref().unwrap_or_default(),
                row.expected_player.as_deref().unwrap_or_default(),
            ),
        }
    }
}

/// Reads the evaluation question set. Blank cells become empty strings; a missing required
/// column is an error.
pub fn load_test_cases(path: &Path) -> EvalResult<Vec<TestCase>> {
    if !path.exists() {
        return Err(EvalError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let csv_err = |source| EvalError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = reader.headers().map_err(csv_err)?;
    if let Some(column) = REQUIRED_COLUMNS
        .iter()
        .copied()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(EvalError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }

    reader
        .deserialize::<TestRow>()
        .map(|row| row.map(TestCase::from).map_err(csv_err))
        .collect()
}
