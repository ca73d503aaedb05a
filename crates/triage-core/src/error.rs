use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Invalid regex for pattern {pattern_id}: {source}")]
    InvalidRegex {
        pattern_id: String,
        #[source]
        source: regex::Error,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
