use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::RegisterCommand;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Returns
    /// The persisted credential; its email is the session subject used for
    /// token issuance.
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Credential, AuthError>;

    /// Verify a login attempt.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password,
    ///   indistinguishable by design
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<Credential, AuthError>;
}

/// Persistence operations for the credential store.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Retrieve a credential by email.
    ///
    /// The tagged result keeps "not found" and "lookup failed" apart, so a
    /// caller can never mistake a store failure for an existing user.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress)
        -> Result<Option<Credential>, AuthError>;

    /// Persist a new credential.
    ///
    /// Uniqueness is enforced by the store's unique index: under concurrent
    /// registration of the same email the first writer wins and the loser
    /// observes `AlreadyExists`.
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, credential: Credential) -> Result<Credential, AuthError>;
}
