//! Menu Items Router
//!
//! Nested under `/api/menu-items`. Update and delete sit behind
//! [`require_auth_session`].

use auth::domain::repository::AuthSessionRepository;
use auth::{AuthMiddlewareState, PgAuthSessionRepository, require_auth_session};
use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, put};
use std::sync::Arc;

use crate::application::config::MenuItemsConfig;
use crate::domain::repository::MenuItemRepository;
use crate::infra::postgres::PgMenuItemRepository;
use crate::presentation::handlers::{self, MenuItemsAppState};

/// Create the menu items router with PostgreSQL repositories
pub fn menu_items_router(
    repo: PgMenuItemRepository,
    config: MenuItemsConfig,
    auth: AuthMiddlewareState<PgAuthSessionRepository>,
) -> Router {
    menu_items_router_generic(repo, config, auth)
}

/// Create a menu items router for any repository implementation
pub fn menu_items_router_generic<R, S>(
    repo: R,
    config: MenuItemsConfig,
    auth: AuthMiddlewareState<S>,
) -> Router
where
    R: MenuItemRepository + Clone + Send + Sync + 'static,
    S: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let state = MenuItemsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/{id}/update", put(handlers::update_menu_item::<R>))
        .route("/{id}/delete", delete(handlers::delete_menu_item::<R>))
        .route_layer(from_fn_with_state(auth, require_auth_session::<S>));

    Router::new()
        .route("/", get(handlers::list_menu_items::<R>))
        .route("/{id}", get(handlers::get_menu_item::<R>))
        .merge(protected)
        .with_state(state)
}
