//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use auth::middleware::inject_csrf_cookie;
use auth::{AuthConfig, AuthMiddlewareState, store::AuthSessionStore};
use axum::{
    Router,
    http::{Method, header},
    middleware::from_fn_with_state,
};
use menu_items::{MenuItemsConfig, menu_items_router, store::MenuItemStore};
use platform::csrf::CsrfConfig;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,menu_items=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .connect(&settings.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired auth sessions
    // Errors here should not prevent server startup
    let auth_store = AuthSessionStore::new(pool.clone());
    if let Err(e) = auth_store.cleanup_expired().await {
        tracing::warn!(
            error = %e,
            "Auth session cleanup failed, continuing anyway"
        );
    }

    let auth_state = AuthMiddlewareState::new(
        auth_store,
        AuthConfig::with_secret(settings.auth_session_secret),
    );

    let csrf_config = CsrfConfig {
        secret: settings.csrf_secret,
        cookie_secure: settings.cookie_secure,
        ..CsrfConfig::default()
    };

    let menu_items = menu_items_router(
        MenuItemStore::new(pool.clone()),
        MenuItemsConfig::new(csrf_config.clone()),
        auth_state,
    );

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(settings.frontend_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/menu-items", menu_items)
        .layer(from_fn_with_state(Arc::new(csrf_config), inject_csrf_cookie))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", settings.bind_addr);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
