use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::ports::CredentialRepository;

/// Postgres-backed credential store.
///
/// Uniqueness lives in the `users` primary key on email: concurrent
/// registrations of the same address are serialized by the index, the first
/// insert wins, the second surfaces as `AlreadyExists`.
pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn credential_from_row(row: &PgRow) -> Result<Credential, AuthError> {
        Ok(Credential {
            name: row
                .try_get("name")
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
            email: EmailAddress::new(
                row.try_get("email")
                    .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
            )?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::credential_from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, credential: Credential) -> Result<Credential, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&credential.name)
        .bind(credential.email.as_str())
        .bind(&credential.password_hash)
        .bind(credential.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::AlreadyExists(credential.email.to_string());
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(credential)
    }
}
