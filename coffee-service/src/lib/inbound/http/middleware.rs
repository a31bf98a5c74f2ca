use auth::TokenKind;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Extension type carrying the validated token subject into protected
/// handlers. The subject is taken from verified claims, never from the raw
/// request.
#[derive(Debug, Clone)]
pub struct AuthenticatedSubject {
    pub email: String,
}

/// Middleware guarding protected routes.
///
/// Extracts the bearer token, validates it as an access token, and stores the
/// authenticated subject in request extensions. A missing, malformed,
/// invalid, or expired token rejects the request with 401 and the wrapped
/// handler never runs. Single synchronous check per request, no retries.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state
        .token_service
        .validate(token, TokenKind::Access)
        .map_err(|e| {
            tracing::warn!("Access token rejected: {}", e);
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Invalid or expired token"
                })),
            )
                .into_response()
        })?;

    req.extensions_mut()
        .insert(AuthenticatedSubject { email: claims.sub });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Missing Authorization header"
                })),
            )
                .into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header"
            })),
        )
            .into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header format. Expected: Bearer <token>"
            })),
        )
            .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
