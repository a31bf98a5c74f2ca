use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenKind;
use super::clock::Clock;
use super::clock::SystemClock;
use super::errors::TokenError;

/// Access/refresh token pair issued on register, login, and refresh.
///
/// Both tokens carry the same subject; their expiry horizons are independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

struct KindKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KindKeys {
    fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Issues and validates signed, time-bound token pairs.
///
/// Access and refresh tokens are signed with separate secrets and TTLs. Tokens
/// are self-contained (HS256-signed claims); there is no server-side token
/// state and therefore no revocation.
///
/// A token's lifecycle is `Issued -> Valid -> Expired`, with expiry checked
/// against the injected [`Clock`] rather than the signing library's own
/// system-time validation.
pub struct TokenService<C: Clock = SystemClock> {
    access: KindKeys,
    refresh: KindKeys,
    access_ttl: Duration,
    refresh_ttl: Duration,
    algorithm: Algorithm,
    clock: C,
}

impl TokenService<SystemClock> {
    /// Create a token service backed by the system clock.
    ///
    /// # Arguments
    /// * `access_secret` - Signing secret for access tokens (>= 32 bytes)
    /// * `refresh_secret` - Signing secret for refresh tokens (>= 32 bytes)
    /// * `access_ttl` - Access token lifetime (short, e.g. 15 minutes)
    /// * `refresh_ttl` - Refresh token lifetime (long, e.g. 7 days)
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self::with_clock(access_secret, refresh_secret, access_ttl, refresh_ttl, SystemClock)
    }
}

impl<C: Clock> TokenService<C> {
    /// Create a token service with an explicit time source.
    pub fn with_clock(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
        clock: C,
    ) -> Self {
        Self {
            access: KindKeys::from_secret(access_secret),
            refresh: KindKeys::from_secret(refresh_secret),
            access_ttl,
            refresh_ttl,
            algorithm: Algorithm::HS256,
            clock,
        }
    }

    /// Issue an access/refresh pair for `subject` at the current time.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, TokenError> {
        let now = self.clock.now();

        Ok(TokenPair {
            access_token: self.sign(subject, now, TokenKind::Access)?,
            refresh_token: self.sign(subject, now, TokenKind::Refresh)?,
        })
    }

    /// Validate a token of the expected kind and return its claims.
    ///
    /// # Errors
    /// * `Invalid` - Bad signature, malformed token, or kind mismatch
    /// * `Expired` - Signature verified but expiry is not in the future
    pub fn validate(&self, token: &str, expected_kind: TokenKind) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the injected clock
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let keys = self.keys_for(expected_kind);
        let token_data = decode::<Claims>(token, &keys.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;

        let claims = token_data.claims;
        if claims.kind != expected_kind {
            return Err(TokenError::Invalid);
        }
        if claims.is_expired(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Exchange a valid refresh token for a brand-new access token.
    ///
    /// The new access token gets a fresh `now + access_ttl` expiry and the
    /// subject copied from the refresh token's claims. The refresh token
    /// itself is not rotated.
    ///
    /// # Errors
    /// * `Invalid` - Not a well-signed refresh-kind token
    /// * `Expired` - Refresh token has no remaining lifetime
    pub fn refresh_access(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.validate(refresh_token, TokenKind::Refresh)?;

        let now = self.clock.now();
        // Guards the exact boundary where signature validation alone would
        // still pass under clock skew
        if claims.remaining(now) <= Duration::zero() {
            return Err(TokenError::Expired);
        }

        self.sign(&claims.sub, now, TokenKind::Access)
    }

    fn sign(&self, subject: &str, now: DateTime<Utc>, kind: TokenKind) -> Result<String, TokenError> {
        let claims = Claims::new(subject, now, self.ttl_for(kind), kind);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.keys_for(kind).encoding)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    fn keys_for(&self, kind: TokenKind) -> &KindKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    fn ttl_for(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const ACCESS_SECRET: &[u8] = b"access_secret_at_least_32_bytes_long!";
    const REFRESH_SECRET: &[u8] = b"refresh_secret_at_least_32_bytes_ok!";

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn service_at(now: DateTime<Utc>) -> TokenService<FixedClock> {
        TokenService::with_clock(
            ACCESS_SECRET,
            REFRESH_SECRET,
            Duration::minutes(15),
            Duration::days(7),
            FixedClock(now),
        )
    }

    #[test]
    fn test_issue_and_validate_pair() {
        let service = service_at(t0());

        let pair = service.issue_pair("a@x.com").expect("Failed to issue pair");
        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());

        let access = service
            .validate(&pair.access_token, TokenKind::Access)
            .expect("Access token should validate");
        assert_eq!(access.sub, "a@x.com");
        assert_eq!(access.kind, TokenKind::Access);
        assert_eq!(access.exp - access.iat, 15 * 60);

        let refresh = service
            .validate(&pair.refresh_token, TokenKind::Refresh)
            .expect("Refresh token should validate");
        assert_eq!(refresh.sub, "a@x.com");
        assert_eq!(refresh.exp - refresh.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let service = service_at(t0());
        let other = TokenService::with_clock(
            b"another_access_secret_32_bytes_long!!",
            b"another_refresh_secret_32_bytes_ok!!!",
            Duration::minutes(15),
            Duration::days(7),
            FixedClock(t0()),
        );

        let pair = service.issue_pair("a@x.com").unwrap();

        assert_eq!(
            other.validate(&pair.access_token, TokenKind::Access),
            Err(TokenError::Invalid)
        );
        assert_eq!(
            other.validate(&pair.refresh_token, TokenKind::Refresh),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        let service = service_at(t0());

        assert_eq!(
            service.validate("garbage", TokenKind::Access),
            Err(TokenError::Invalid)
        );
        assert_eq!(
            service.validate("a.b.c", TokenKind::Access),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_access_expires_before_refresh() {
        let pair = service_at(t0()).issue_pair("a@x.com").unwrap();

        // 15 minutes and 1 second later: access gone, refresh still good
        let later = service_at(t0() + Duration::minutes(15) + Duration::seconds(1));

        assert_eq!(
            later.validate(&pair.access_token, TokenKind::Access),
            Err(TokenError::Expired)
        );
        assert!(later.validate(&pair.refresh_token, TokenKind::Refresh).is_ok());
    }

    #[test]
    fn test_token_invalid_at_exact_expiry() {
        let pair = service_at(t0()).issue_pair("a@x.com").unwrap();
        let at_expiry = service_at(t0() + Duration::minutes(15));

        assert_eq!(
            at_expiry.validate(&pair.access_token, TokenKind::Access),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_kind_mismatch_is_invalid_even_with_shared_secret() {
        // Same secret for both kinds, so only the kind tag separates them
        let service = TokenService::with_clock(
            ACCESS_SECRET,
            ACCESS_SECRET,
            Duration::minutes(15),
            Duration::days(7),
            FixedClock(t0()),
        );

        let pair = service.issue_pair("a@x.com").unwrap();

        assert_eq!(
            service.validate(&pair.access_token, TokenKind::Refresh),
            Err(TokenError::Invalid)
        );
        assert_eq!(
            service.validate(&pair.refresh_token, TokenKind::Access),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_refresh_access_issues_fresh_access_token() {
        let pair = service_at(t0()).issue_pair("a@x.com").unwrap();

        // Well past the original access expiry
        let later = service_at(t0() + Duration::days(1));
        let access = later
            .refresh_access(&pair.refresh_token)
            .expect("Refresh should succeed");

        let claims = later.validate(&access, TokenKind::Access).unwrap();
        assert_eq!(claims.sub, "a@x.com");
        // Expiry restarts from the refresh call, not from original issuance
        assert_eq!(claims.iat, (t0() + Duration::days(1)).timestamp());
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_refresh_access_rejects_expired_refresh_token() {
        let pair = service_at(t0()).issue_pair("a@x.com").unwrap();
        let later = service_at(t0() + Duration::days(8));

        assert_eq!(
            later.refresh_access(&pair.refresh_token),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_refresh_access_rejects_access_token() {
        let service = service_at(t0());
        let pair = service.issue_pair("a@x.com").unwrap();

        assert_eq!(
            service.refresh_access(&pair.access_token),
            Err(TokenError::Invalid)
        );
    }
}
