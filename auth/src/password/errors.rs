use thiserror::Error;

/// Error type for password operations.
///
/// Neither variant is produced by a merely wrong password; both signal an
/// infrastructure failure (hashing internals or a corrupt stored hash).
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
