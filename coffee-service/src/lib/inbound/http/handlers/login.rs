use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::register::TokenPairData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// `POST /auth/login`
///
/// Unknown email, wrong password, and a syntactically invalid email all
/// answer with the same 401 body, so the endpoint cannot be used to probe
/// which emails are registered.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<TokenPairData>, ApiError> {
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let credential = state
        .auth_service
        .login(&email, &body.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    let pair = state
        .token_service
        .issue_pair(credential.email.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(ApiSuccess::new(StatusCode::CREATED, TokenPairData::from(pair)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}
