//! HTTP Handlers

use auth::CurrentUser;
use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::HeaderMap;
use axum_extra::extract::WithRejection;
use kernel::id::MenuItemId;
use std::sync::Arc;

use crate::application::config::MenuItemsConfig;
use crate::application::{
    DeleteMenuItemUseCase, GetMenuItemUseCase, ListMenuItemsUseCase, UpdateMenuItemUseCase,
};
use crate::domain::repository::MenuItemRepository;
use crate::error::{MenuItemError, MenuItemResult};
use crate::presentation::dto::{
    DeleteMenuItemResponse, ListMenuItemsQuery, MenuItemListResponse, MenuItemResponse,
};
use crate::presentation::form::MenuItemForm;

/// Shared state for menu item handlers
#[derive(Clone)]
pub struct MenuItemsAppState<R>
where
    R: MenuItemRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<MenuItemsConfig>,
}

/// GET /api/menu-items
pub async fn list_menu_items<R>(
    State(state): State<MenuItemsAppState<R>>,
    WithRejection(Query(query), _): WithRejection<Query<ListMenuItemsQuery>, MenuItemError>,
) -> MenuItemResult<Json<MenuItemListResponse>>
where
    R: MenuItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListMenuItemsUseCase::new(state.repo.clone(), state.config.clone());
    let items = use_case.execute(query.restaurant_id).await?;

    Ok(Json(MenuItemListResponse {
        menu_items: items.into_iter().map(MenuItemResponse::from).collect(),
    }))
}

/// GET /api/menu-items/{id}
pub async fn get_menu_item<R>(
    State(state): State<MenuItemsAppState<R>>,
    WithRejection(Path(id), _): WithRejection<Path<MenuItemId>, MenuItemError>,
) -> MenuItemResult<Json<MenuItemResponse>>
where
    R: MenuItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetMenuItemUseCase::new(state.repo.clone());
    let item = use_case.execute(id).await?;

    Ok(Json(item.into()))
}

/// PUT /api/menu-items/{id}/update
pub async fn update_menu_item<R>(
    State(state): State<MenuItemsAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    headers: HeaderMap,
    WithRejection(Path(id), _): WithRejection<Path<MenuItemId>, MenuItemError>,
    WithRejection(Json(form), _): WithRejection<Json<MenuItemForm>, MenuItemError>,
) -> MenuItemResult<Json<MenuItemResponse>>
where
    R: MenuItemRepository + Clone + Send + Sync + 'static,
{
    let csrf = &state.config.csrf;
    let token = platform::cookie::extract_cookie(&headers, &csrf.cookie_name);
    let csrf_check = csrf.verify(token.as_deref());

    let changes = form.validate(csrf_check, &state.config)?;

    let use_case = UpdateMenuItemUseCase::new(state.repo.clone());
    let item = use_case.execute(id, changes).await?;

    tracing::debug!(menu_item_id = %id, user_id = %user.user_id, "Menu item update by user");

    Ok(Json(item.into()))
}

/// DELETE /api/menu-items/{id}/delete
pub async fn delete_menu_item<R>(
    State(state): State<MenuItemsAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    WithRejection(Path(id), _): WithRejection<Path<MenuItemId>, MenuItemError>,
) -> MenuItemResult<Json<DeleteMenuItemResponse>>
where
    R: MenuItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteMenuItemUseCase::new(state.repo.clone());
    let output = use_case.execute(id).await?;

    tracing::debug!(menu_item_id = %id, user_id = %user.user_id, "Menu item delete by user");

    Ok(Json(output.into()))
}
