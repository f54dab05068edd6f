use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown classification label '{value}' (expected TP, FP or FN)")]
    UnknownLabel { value: String },
}
