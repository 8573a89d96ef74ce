use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Malformed share string: {0}")]
    Share(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RoiResult<T> = Result<T, RoiError>;
