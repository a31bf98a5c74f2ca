//! Authentication library
//!
//! Provides the authentication infrastructure for the coffee-shop backend:
//! - Password hashing (Argon2id)
//! - Signed, time-bound access/refresh token pairs
//!
//! Tokens are stateless: validity is purely cryptographic (signature + expiry)
//! and there is no server-side revocation list. Logout/blacklisting is
//! deliberately unsupported at this scale.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Token Pairs
//! ```
//! use chrono::Duration;
//! use auth::{TokenService, TokenKind};
//!
//! let service = TokenService::new(
//!     b"access_secret_at_least_32_bytes_long!",
//!     b"refresh_secret_at_least_32_bytes_ok!",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! );
//!
//! let pair = service.issue_pair("a@example.com").unwrap();
//! let claims = service
//!     .validate(&pair.access_token, TokenKind::Access)
//!     .unwrap();
//! assert_eq!(claims.sub, "a@example.com");
//!
//! // Exchange the refresh token for a fresh access token.
//! let access = service.refresh_access(&pair.refresh_token).unwrap();
//! assert!(!access.is_empty());
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::Clock;
pub use token::SystemClock;
pub use token::TokenError;
pub use token::TokenKind;
pub use token::TokenPair;
pub use token::TokenService;
