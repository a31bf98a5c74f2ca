use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_coffee::CoffeeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::coffee::models::Slug;
use crate::domain::coffee::ports::CoffeeServicePort;
use crate::inbound::http::router::AppState;

/// `GET /coffees/:slug` (public)
pub async fn get_coffee(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<CoffeeData>, ApiError> {
    let slug = Slug::new(slug).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .coffee_service
        .get_coffee(&slug)
        .await
        .map_err(ApiError::from)
        .map(|ref coffee| ApiSuccess::new(StatusCode::OK, coffee.into()))
}
