use thiserror::Error;

/// Error for Slug validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug must not be empty")]
    Empty,

    #[error("Slug too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Slug contains invalid characters (only lowercase alphanumeric and hyphen allowed)")]
    InvalidCharacters,
}

/// Top-level error for catalog operations
#[derive(Debug, Clone, Error)]
pub enum CoffeeError {
    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("Coffee not found: {0}")]
    NotFound(String),

    #[error("Coffee already exists: {0}")]
    AlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
