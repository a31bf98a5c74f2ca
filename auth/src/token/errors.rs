use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature failure, malformed input, and token-kind mismatch all
    /// collapse into this variant: a caller presenting a crafted token learns
    /// nothing about which check rejected it.
    #[error("Token is invalid")]
    Invalid,

    /// Signature verified but the expiry timestamp is not in the future.
    #[error("Token is expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}
