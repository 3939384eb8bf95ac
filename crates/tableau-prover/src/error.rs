//! Error types for the tableau prover

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProverError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProverError>;
