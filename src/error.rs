/// Error types for artifact loading, ingestion and scoring

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact is not usable: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("uploaded CSV contains no data rows")]
    Empty,

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("feature matrix has {got} columns but the model expects {expected}")]
    WidthMismatch { expected: usize, got: usize },
}
