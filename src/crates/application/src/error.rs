use model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Aggregate not found: {0}: {1}")]
    AggregateNotFound(String, String),
    #[error("Model error: {0}")]
    ModelError(#[from] ModelError),
    #[error("Unknown error: {0}")]
    UnknownError(String),
}
