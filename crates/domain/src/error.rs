//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PersonnelError`] via `From`, so callers can match on the category
//! (`Validation`, `NotFound`, `Storage`) without knowing which adapter
//! produced it.

/// Top-level error shared by the application and its adapters.
#[derive(Debug, thiserror::Error)]
pub enum PersonnelError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that does not satisfy a domain invariant.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The identifier in the request path is not a valid number.
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
}

/// The requested record does not exist.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
