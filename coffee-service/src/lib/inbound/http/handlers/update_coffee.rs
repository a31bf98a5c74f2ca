use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_coffee::CoffeeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::coffee::models::Slug;
use crate::domain::coffee::models::UpdateCoffeeCommand;
use crate::domain::coffee::ports::CoffeeServicePort;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

/// `PUT /coffees/:slug` (protected)
///
/// Partial update; absent fields keep their current values. The slug itself
/// is immutable.
pub async fn update_coffee(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(slug): Path<String>,
    Json(body): Json<UpdateCoffeeRequest>,
) -> Result<ApiSuccess<CoffeeData>, ApiError> {
    let slug = Slug::new(slug).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    if let Some(price) = body.price {
        if price < 0.0 {
            return Err(ApiError::UnprocessableEntity(
                "Price must not be negative".to_string(),
            ));
        }
    }

    tracing::info!(subject = %subject.email, slug = %slug, "Updating coffee");

    let command = UpdateCoffeeCommand {
        name: body.name,
        description: body.description,
        price: body.price,
        image: body.image,
    };

    state
        .coffee_service
        .update_coffee(&slug, command)
        .await
        .map_err(ApiError::from)
        .map(|ref coffee| ApiSuccess::new(StatusCode::OK, coffee.into()))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateCoffeeRequest {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    image: Option<String>,
}
