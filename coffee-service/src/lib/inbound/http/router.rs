use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_coffee::create_coffee;
use super::handlers::delete_coffee::delete_coffee;
use super::handlers::get_coffee::get_coffee;
use super::handlers::list_coffees::list_coffees;
use super::handlers::login::login;
use super::handlers::refresh::refresh;
use super::handlers::register::register;
use super::handlers::update_coffee::update_coffee;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::service::AuthService;
use crate::domain::coffee::service::CoffeeService;
use crate::outbound::repositories::coffee::PostgresCoffeeRepository;
use crate::outbound::repositories::credential::PostgresCredentialRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresCredentialRepository>>,
    pub coffee_service: Arc<CoffeeService<PostgresCoffeeRepository>>,
    pub token_service: Arc<TokenService>,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresCredentialRepository>>,
    coffee_service: Arc<CoffeeService<PostgresCoffeeRepository>>,
    token_service: Arc<TokenService>,
) -> Router {
    let state = AppState {
        auth_service,
        coffee_service,
        token_service,
    };

    let public_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/coffees", get(list_coffees))
        .route("/coffees/:slug", get(get_coffee));

    // Catalog writes require a valid access token
    let protected_routes = Router::new()
        .route("/coffees", post(create_coffee))
        .route("/coffees/:slug", put(update_coffee))
        .route("/coffees/:slug", delete(delete_coffee))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
