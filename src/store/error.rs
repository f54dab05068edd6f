use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("player dataset not found: {path}")]
    NotFound { path: PathBuf },

    #[error("player dataset {path} has no `{column}` column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("failed to read player dataset {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
