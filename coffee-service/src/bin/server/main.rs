use std::sync::Arc;

use auth::TokenService;
use chrono::Duration;
use coffee_service::config::Config;
use coffee_service::domain::auth::service::AuthService;
use coffee_service::domain::coffee::service::CoffeeService;
use coffee_service::inbound::http::router::create_router;
use coffee_service::outbound::repositories::PostgresCoffeeRepository;
use coffee_service::outbound::repositories::PostgresCredentialRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coffee_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "coffee-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_ttl_minutes = config.auth.access_ttl_minutes,
        refresh_ttl_days = config.auth.refresh_ttl_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_service = Arc::new(TokenService::new(
        config.auth.access_secret.as_bytes(),
        config.auth.refresh_secret.as_bytes(),
        Duration::minutes(config.auth.access_ttl_minutes),
        Duration::days(config.auth.refresh_ttl_days),
    ));

    let credential_repository = Arc::new(PostgresCredentialRepository::new(pg_pool.clone()));
    let coffee_repository = Arc::new(PostgresCoffeeRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(credential_repository));
    let coffee_service = Arc::new(CoffeeService::new(coffee_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(auth_service, coffee_service, token_service);
    axum::serve(http_listener, application).await?;

    Ok(())
}
