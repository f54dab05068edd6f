use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("test dataset not found: {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("test dataset {path} has no `{column}` column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type EvalResult<T> = Result<T, EvalError>;
