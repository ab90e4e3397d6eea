// errors.rs
use crate::filters::types::FilterId;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or downstream layers (storage).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Storage Error: {0}")]
    Storage(#[from] StorageError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Failures of the saved-filter persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("saved filter not found: {0}")]
    NotFound(String),
    #[error("failed to encode saved filters: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("value does not fit the {filter_id} filter")]
    ValueShape { filter_id: FilterId },
}
