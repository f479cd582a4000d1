use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SurvivalError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model artifact: {message}")]
    InvalidArtifact { message: String },

    #[error("input columns [{actual}] do not match the model schema [{expected}]")]
    SchemaMismatch { expected: String, actual: String },

    #[error("column {column} holds a non-numeric value in row {row}")]
    NonNumericCell { column: String, row: usize },

    #[error("time {time} is outside the survival function domain [0, {max}]")]
    OutOfDomain { time: f64, max: f64 },

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

impl SurvivalError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SurvivalError>;
