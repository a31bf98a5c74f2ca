use auth::TokenError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// `POST /auth/refresh`
///
/// Exchanges a valid refresh token for a new access token. The refresh token
/// itself is not rotated; once it expires the client must log in again.
pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequestBody>,
) -> Result<ApiSuccess<RefreshResponseData>, ApiError> {
    let access_token = state
        .token_service
        .refresh_access(&body.refresh_token)
        .map_err(|e| match e {
            TokenError::Invalid | TokenError::Expired => {
                ApiError::Unauthorized("Invalid or expired refresh token".to_string())
            }
            TokenError::SigningFailed(msg) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", msg))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RefreshResponseData { access_token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshRequestBody {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshResponseData {
    pub access_token: String,
}
