use comtrack_core::error::CoreError;

/// Error type for repositories that enforce domain rules beyond plain CRUD.
///
/// Plain CRUD repositories return bare `sqlx::Error`; the checklist stores
/// also surface domain errors (not-found, invalid state, validation) and use
/// this enum instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
