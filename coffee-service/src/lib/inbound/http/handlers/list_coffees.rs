use axum::extract::State;
use axum::http::StatusCode;

use super::create_coffee::CoffeeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::coffee::ports::CoffeeServicePort;
use crate::inbound::http::router::AppState;

/// `GET /coffees` (public)
pub async fn list_coffees(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CoffeeData>>, ApiError> {
    state
        .coffee_service
        .list_coffees()
        .await
        .map_err(ApiError::from)
        .map(|coffees| {
            let data = coffees.iter().map(CoffeeData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
