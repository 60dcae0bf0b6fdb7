use thiserror::Error;

/// Errors at the engine boundary.
///
/// Missing or mathematically unusable inputs are never errors: they produce
/// `None` fields in the result records. This enum only covers the
/// serialization helpers on the data model.
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
