use auth::TokenPair;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::EmailError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// `POST /auth/register`
///
/// Registers a new user and answers with a fresh token pair, so the client is
/// logged in immediately. Duplicate email is a 409.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<TokenPairData>, ApiError> {
    let command = body.try_into_command()?;

    let credential = state
        .auth_service
        .register(command)
        .await
        .map_err(ApiError::from)?;

    let pair = state
        .token_service
        .issue_pair(credential.email.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(ApiSuccess::new(StatusCode::CREATED, TokenPairData::from(pair)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Name must not be empty")]
    MissingName,

    #[error("Password must not be empty")]
    MissingPassword,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        if self.name.trim().is_empty() {
            return Err(ParseRegisterRequestError::MissingName);
        }
        if self.password.is_empty() {
            return Err(ParseRegisterRequestError::MissingPassword);
        }
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterCommand::new(self.name, email, self.password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Token pair payload shared by register and login responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairData {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairData {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}
