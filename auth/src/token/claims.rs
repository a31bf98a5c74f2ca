use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Tag distinguishing an access token from a refresh token.
///
/// Embedded in every token so a refresh token can never be replayed against a
/// protected route (and vice versa), even when both kinds share a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Decoded content of a signed token.
///
/// Produced by successful validation and discarded after use; claims are never
/// persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the email the token asserts ownership of)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Token kind tag
    pub kind: TokenKind,
}

impl Claims {
    /// Build claims for a token issued at `now` and expiring after `ttl`.
    pub fn new(subject: impl Into<String>, now: DateTime<Utc>, ttl: Duration, kind: TokenKind) -> Self {
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            kind,
        }
    }

    /// Lifetime left at `now`. Negative once the token has expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        Duration::seconds(self.exp - now.timestamp())
    }

    /// A token is valid only while its expiry is strictly in the future.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
