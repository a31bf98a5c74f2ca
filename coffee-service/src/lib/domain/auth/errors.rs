use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for credential and authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Email already registered: {0}")]
    AlreadyExists(String),

    /// Unknown email and wrong password deliberately share this variant so
    /// a login failure never reveals whether the email exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
