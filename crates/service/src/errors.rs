use thiserror::Error;

/// Failures surfaced by a record store implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Db(String),
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    #[error("page size must be positive")]
    InvalidPageSize,
}

/// Failures escaping the customer service. A missing record is not one of
/// them: "not found" is reported inside the response envelope, not raised.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
