use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::coffee::models::Slug;
use crate::domain::coffee::ports::CoffeeServicePort;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

/// `DELETE /coffees/:slug` (protected)
pub async fn delete_coffee(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<DeleteCoffeeResponseData>, ApiError> {
    let slug = Slug::new(slug).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    tracing::info!(subject = %subject.email, slug = %slug, "Deleting coffee");

    state
        .coffee_service
        .delete_coffee(&slug)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteCoffeeResponseData {
            slug: slug.as_str().to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteCoffeeResponseData {
    pub slug: String,
}
