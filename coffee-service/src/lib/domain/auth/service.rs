use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialRepository;

/// Domain service for registration and login.
///
/// Orchestrates the credential store and password hasher; token issuance
/// stays at the handler seam, fed by the subject this service returns.
pub struct AuthService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    password_hasher: auth::PasswordHasher,
}

impl<CR> AuthService<CR>
where
    CR: CredentialRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CR> AuthServicePort for AuthService<CR>
where
    CR: CredentialRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Credential, AuthError> {
        // Only a positive lookup means "taken"; a lookup failure propagates
        // as itself instead of masquerading as an existing user.
        if let Some(existing) = self.repository.find_by_email(&command.email).await? {
            return Err(AuthError::AlreadyExists(existing.email.to_string()));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let credential = Credential {
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(credential).await
    }

    async fn login(&self, email: &EmailAddress, password: &str) -> Result<Credential, AuthError> {
        let credential = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify(password, &credential.password_hash)?;

        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestCredentialRepository {}

        #[async_trait]
        impl CredentialRepository for TestCredentialRepository {
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Credential>, AuthError>;
            async fn create(&self, credential: Credential) -> Result<Credential, AuthError>;
        }
    }

    fn email(s: &str) -> EmailAddress {
        EmailAddress::new(s.to_string()).unwrap()
    }

    fn stored_credential(address: &str, password: &str) -> Credential {
        Credential {
            name: "A".to_string(),
            email: email(address),
            password_hash: auth::PasswordHasher::new().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|credential| {
                credential.email.as_str() == "a@x.com"
                    && credential.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|credential| Ok(credential));

        let service = AuthService::new(Arc::new(repository));

        let command = RegisterCommand::new("A".to_string(), email("a@x.com"), "p1".to_string());
        let credential = service.register(command).await.expect("Register failed");

        assert_eq!(credential.email.as_str(), "a@x.com");
        // Plaintext never stored
        assert_ne!(credential.password_hash, "p1");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_credential("a@x.com", "p1"))));
        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository));

        let command = RegisterCommand::new("B".to_string(), email("a@x.com"), "p2".to_string());
        let result = service.register(command).await;

        assert!(matches!(result, Err(AuthError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_lookup_failure_is_not_already_exists() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(AuthError::DatabaseError("connection reset".to_string())));
        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository));

        let command = RegisterCommand::new("A".to_string(), email("a@x.com"), "p1".to_string());
        let result = service.register(command).await;

        assert!(matches!(result, Err(AuthError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_register_then_login_round_trip() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        // Echo the created row back on the login lookup
        repository.expect_create().times(1).returning(|credential| {
            let stored = credential.clone();
            Ok(stored)
        });

        let service = AuthService::new(Arc::new(repository));
        let command = RegisterCommand::new("A".to_string(), email("a@x.com"), "p1".to_string());
        let created = service.register(command).await.unwrap();

        let mut repository = MockTestCredentialRepository::new();
        let stored = created.clone();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let service = AuthService::new(Arc::new(repository));
        let logged_in = service.login(&email("a@x.com"), "p1").await.unwrap();

        assert_eq!(logged_in.email.as_str(), created.email.as_str());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_credential("a@x.com", "right"))));

        let service = AuthService::new(Arc::new(repository));
        let result = service.login(&email("a@x.com"), "wrong").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_matches_wrong_password_error() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(repository));
        let result = service.login(&email("nobody@x.com"), "p1").await;

        // Identical failure for unknown email and wrong password
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
