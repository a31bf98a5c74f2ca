use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::coffee::errors::SlugError;
use crate::domain::coffee::models::Coffee;
use crate::domain::coffee::models::CreateCoffeeCommand;
use crate::domain::coffee::models::Slug;
use crate::domain::coffee::ports::CoffeeServicePort;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

/// `POST /coffees` (protected)
pub async fn create_coffee(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Json(body): Json<CreateCoffeeRequest>,
) -> Result<ApiSuccess<CoffeeData>, ApiError> {
    let command = body.try_into_command()?;

    tracing::info!(subject = %subject.email, slug = %command.slug, "Creating coffee");

    state
        .coffee_service
        .create_coffee(command)
        .await
        .map_err(ApiError::from)
        .map(|ref coffee| ApiSuccess::new(StatusCode::CREATED, coffee.into()))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateCoffeeRequest {
    name: String,
    slug: String,
    description: String,
    price: f64,
    image: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateCoffeeRequestError {
    #[error("Invalid slug: {0}")]
    Slug(#[from] SlugError),

    #[error("Name must not be empty")]
    MissingName,

    #[error("Price must not be negative")]
    NegativePrice,
}

impl CreateCoffeeRequest {
    fn try_into_command(self) -> Result<CreateCoffeeCommand, ParseCreateCoffeeRequestError> {
        if self.name.trim().is_empty() {
            return Err(ParseCreateCoffeeRequestError::MissingName);
        }
        if self.price < 0.0 {
            return Err(ParseCreateCoffeeRequestError::NegativePrice);
        }
        let slug = Slug::new(self.slug)?;
        Ok(CreateCoffeeCommand {
            name: self.name,
            slug,
            description: self.description,
            price: self.price,
            image: self.image,
        })
    }
}

impl From<ParseCreateCoffeeRequestError> for ApiError {
    fn from(err: ParseCreateCoffeeRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Catalog entry payload shared by the coffee handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoffeeData {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Coffee> for CoffeeData {
    fn from(coffee: &Coffee) -> Self {
        Self {
            id: coffee.id.to_string(),
            name: coffee.name.clone(),
            slug: coffee.slug.as_str().to_string(),
            description: coffee.description.clone(),
            price: coffee.price,
            image: coffee.image.clone(),
            created_at: coffee.created_at,
            updated_at: coffee.updated_at,
        }
    }
}
