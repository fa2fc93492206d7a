//! Router tests against in-memory menu item and session stores

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use auth::domain::repository::AuthSessionRepository;
use auth::domain::{AuthSession, SessionToken};
use auth::{AuthConfig, AuthError, AuthMiddlewareState, AuthResult};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use chrono::{Duration, TimeZone, Utc};
use kernel::id::{MenuItemId, RestaurantId, UserId};
use platform::crypto::sha256;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use crate::application::config::MenuItemsConfig;
use crate::domain::entity::MenuItem;
use crate::domain::repository::MenuItemRepository;
use crate::domain::value_object::{FoodImage, FoodType, Price};
use crate::error::MenuItemResult;
use crate::presentation::router::menu_items_router_generic;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) TestBrowser/1.0";
const SESSION_SECRET: [u8; 32] = [3u8; 32];

// ============================================================================
// In-memory stores
// ============================================================================

#[derive(Clone, Default)]
struct MemoryMenu {
    items: Arc<Mutex<BTreeMap<i32, MenuItem>>>,
    /// Deletes report success but leave the row in place
    stuck_deletes: bool,
}

impl MemoryMenu {
    fn with_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let menu = Self::default();
        for item in items {
            menu.items.lock().unwrap().insert(item.id.get(), item);
        }
        menu
    }

    fn get(&self, id: i32) -> Option<MenuItem> {
        self.items.lock().unwrap().get(&id).cloned()
    }
}

impl MenuItemRepository for MemoryMenu {
    async fn find_by_id(&self, id: MenuItemId) -> MenuItemResult<Option<MenuItem>> {
        Ok(self.get(id.get()))
    }

    async fn list(
        &self,
        restaurant_id: Option<RestaurantId>,
        limit: i64,
    ) -> MenuItemResult<Vec<MenuItem>> {
        let items = self.items.lock().unwrap();
        Ok(items
            .values()
            .filter(|item| restaurant_id.is_none_or(|r| item.restaurant_id == r))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, item: &MenuItem) -> MenuItemResult<Option<MenuItem>> {
        let mut items = self.items.lock().unwrap();
        Ok(items.get_mut(&item.id.get()).map(|stored| {
            *stored = item.clone();
            stored.clone()
        }))
    }

    async fn delete(&self, id: MenuItemId) -> MenuItemResult<bool> {
        let mut items = self.items.lock().unwrap();
        if self.stuck_deletes {
            return Ok(items.contains_key(&id.get()));
        }
        Ok(items.remove(&id.get()).is_some())
    }

    async fn exists(&self, id: MenuItemId) -> MenuItemResult<bool> {
        Ok(self.items.lock().unwrap().contains_key(&id.get()))
    }
}

#[derive(Clone, Default)]
struct MemorySessions {
    sessions: Arc<Mutex<HashMap<Uuid, AuthSession>>>,
}

impl AuthSessionRepository for MemorySessions {
    async fn find_by_id(
        &self,
        session_id: Uuid,
        fingerprint_hash: &[u8],
    ) -> AuthResult<Option<AuthSession>> {
        let sessions = self.sessions.lock().unwrap();
        match sessions.get(&session_id) {
            Some(s) if !s.belongs_to(fingerprint_hash) => {
                Err(AuthError::SessionFingerprintMismatch)
            }
            found => Ok(found.cloned()),
        }
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.lock().unwrap().remove(&session_id);
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn menu_item(id: i32, restaurant_id: i32, name: &str) -> MenuItem {
    let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap();
    MenuItem {
        id: MenuItemId::new(id),
        restaurant_id: RestaurantId::new(restaurant_id),
        name: name.to_string(),
        food_type: FoodType::Entree,
        description: "House special".to_string(),
        price: Price::parse("12.5").unwrap(),
        food_image: FoodImage::new("https://example.com/dish.jpg").unwrap(),
        created_at: stamp,
        updated_at: stamp,
    }
}

struct TestApp {
    router: Router,
    menu: MemoryMenu,
    config: MenuItemsConfig,
    session_cookie: String,
}

impl TestApp {
    fn new(menu: MemoryMenu) -> Self {
        Self::with_config(menu, MenuItemsConfig::development())
    }

    fn with_config(menu: MemoryMenu, config: MenuItemsConfig) -> Self {
        let sessions = MemorySessions::default();
        let session = AuthSession::new(
            UserId::new(42),
            false,
            sha256(USER_AGENT.as_bytes()).to_vec(),
            Duration::hours(1),
        );
        let token = SessionToken::sign(session.session_id, &SESSION_SECRET);
        sessions
            .sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session);

        let auth = AuthMiddlewareState::new(sessions, AuthConfig::with_secret(SESSION_SECRET));
        let router = menu_items_router_generic(menu.clone(), config.clone(), auth);

        Self {
            router,
            menu,
            config,
            session_cookie: format!("auth_session={token}"),
        }
    }

    /// Cookie header for a signed-in user with a fresh CSRF token
    fn signed_in(&self) -> String {
        format!("{}; csrf_token={}", self.session_cookie, self.config.csrf.issue())
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<String>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::USER_AGENT, USER_AGENT);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn update_body() -> Value {
    json!({
        "name": "Green Curry",
        "foodType": "Side",
        "description": "Coconut, basil, bamboo shoots",
        "price": "15.75",
        "foodImage": "https://example.com/curry.jpg"
    })
}

// ============================================================================
// Read
// ============================================================================

#[tokio::test]
async fn test_get_returns_item() {
    let app = TestApp::new(MemoryMenu::with_items([menu_item(5, 1, "Pho")]));

    let response = app.send(Method::GET, "/5", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["id"], 5);
    assert_eq!(json["restaurantId"], 1);
    assert_eq!(json["name"], "Pho");
    assert_eq!(json["foodType"], "Entree");
    assert_eq!(json["price"], "12.50");
    assert_eq!(json["foodImage"], "https://example.com/dish.jpg");
    assert_eq!(json["createdAt"], "2024-05-01T18:00:00Z");
}

#[tokio::test]
async fn test_get_missing_item_is_not_found() {
    let app = TestApp::new(MemoryMenu::default());

    let response = app.send(Method::GET, "/99", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["detail"], "Menu item couldn't be found");
}

#[tokio::test]
async fn test_get_non_numeric_id_is_bad_request() {
    let app = TestApp::new(MemoryMenu::default());

    let response = app.send(Method::GET, "/pho", None, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["status"], 400);
}

#[tokio::test]
async fn test_get_out_of_range_id_is_bad_request() {
    let app = TestApp::new(MemoryMenu::default());

    let response = app.send(Method::GET, "/99999999999", None, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["status"], 400);
}

#[tokio::test]
async fn test_list_orders_by_id_and_filters_by_restaurant() {
    let app = TestApp::new(MemoryMenu::with_items([
        menu_item(3, 2, "Banh Mi"),
        menu_item(1, 1, "Pho"),
        menu_item(2, 1, "Spring Rolls"),
    ]));

    let json = json_body(app.send(Method::GET, "/", None, None).await).await;
    let ids: Vec<i64> = json["menuItems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let json = json_body(app.send(Method::GET, "/?restaurantId=2", None, None).await).await;
    let items = json["menuItems"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Banh Mi");
}

#[tokio::test]
async fn test_list_is_capped_by_list_limit() {
    let config = MenuItemsConfig {
        list_limit: 2,
        ..MenuItemsConfig::development()
    };
    let app = TestApp::with_config(
        MemoryMenu::with_items([
            menu_item(1, 1, "Pho"),
            menu_item(2, 1, "Spring Rolls"),
            menu_item(3, 1, "Banh Mi"),
        ]),
        config,
    );

    let json = json_body(app.send(Method::GET, "/", None, None).await).await;
    let ids: Vec<i64> = json["menuItems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let seeded = menu_item(5, 1, "Pho");
    let app = TestApp::new(MemoryMenu::with_items([seeded.clone()]));

    let response = app
        .send(Method::PUT, "/5/update", Some(app.signed_in()), Some(update_body()))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["id"], 5);
    assert_eq!(json["name"], "Green Curry");
    assert_eq!(json["foodType"], "Side");
    assert_eq!(json["description"], "Coconut, basil, bamboo shoots");
    assert_eq!(json["price"], "15.75");
    assert_eq!(json["foodImage"], "https://example.com/curry.jpg");

    let stored = app.menu.get(5).unwrap();
    assert_eq!(stored.name, "Green Curry");
    assert_eq!(stored.created_at, seeded.created_at);
    assert!(stored.updated_at > seeded.updated_at);
}

#[tokio::test]
async fn test_update_invalid_form_leaves_item_untouched() {
    let seeded = menu_item(5, 1, "Pho");
    let app = TestApp::new(MemoryMenu::with_items([seeded.clone()]));

    let mut body = update_body();
    body["name"] = json!("");
    body["foodType"] = json!("Soup");

    let response = app
        .send(Method::PUT, "/5/update", Some(app.signed_in()), Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["errors"]["name"], json!(["This field is required."]));
    assert_eq!(json["errors"]["foodType"], json!(["Not a valid choice."]));
    assert!(json["errors"].get("price").is_none());

    assert_eq!(app.menu.get(5).unwrap(), seeded);
}

#[tokio::test]
async fn test_update_reads_csrf_cookie_from_any_cookie_header() {
    let app = TestApp::new(MemoryMenu::with_items([menu_item(5, 1, "Pho")]));
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/5/update")
        .header(header::USER_AGENT, USER_AGENT)
        .header(header::COOKIE, app.session_cookie.clone())
        .header(
            header::COOKIE,
            format!("csrf_token={}", app.config.csrf.issue()),
        )
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(update_body().to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.menu.get(5).unwrap().name, "Green Curry");
}

#[tokio::test]
async fn test_update_without_csrf_cookie_is_rejected() {
    let seeded = menu_item(5, 1, "Pho");
    let app = TestApp::new(MemoryMenu::with_items([seeded.clone()]));

    let response = app
        .send(
            Method::PUT,
            "/5/update",
            Some(app.session_cookie.clone()),
            Some(update_body()),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(
        json["errors"]["csrf_token"],
        json!(["The CSRF token is missing."])
    );
    assert_eq!(app.menu.get(5).unwrap(), seeded);
}

#[tokio::test]
async fn test_update_with_forged_csrf_cookie_is_rejected() {
    let app = TestApp::new(MemoryMenu::with_items([menu_item(5, 1, "Pho")]));
    let cookie = format!("{}; csrf_token=AAAA.BBBB", app.session_cookie);

    let response = app
        .send(Method::PUT, "/5/update", Some(cookie), Some(update_body()))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(
        json["errors"]["csrf_token"],
        json!(["The CSRF token is invalid."])
    );
}

#[tokio::test]
async fn test_update_requires_session() {
    let seeded = menu_item(5, 1, "Pho");
    let app = TestApp::new(MemoryMenu::with_items([seeded.clone()]));
    let cookie = format!("csrf_token={}", app.config.csrf.issue());

    let response = app
        .send(Method::PUT, "/5/update", Some(cookie), Some(update_body()))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()["x-auth-required"], "true");
    assert_eq!(app.menu.get(5).unwrap(), seeded);
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let app = TestApp::new(MemoryMenu::default());

    let response = app
        .send(Method::PUT, "/8/update", Some(app.signed_in()), Some(update_body()))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_malformed_json_is_bad_request() {
    let app = TestApp::new(MemoryMenu::with_items([menu_item(5, 1, "Pho")]));

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/5/update")
        .header(header::USER_AGENT, USER_AGENT)
        .header(header::COOKIE, app.signed_in())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["title"], "Bad Request");
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_removes_item() {
    let app = TestApp::new(MemoryMenu::with_items([menu_item(5, 1, "Pho")]));

    let response = app
        .send(Method::DELETE, "/5/delete", Some(app.session_cookie.clone()), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "Successfully deleted menu item", "id": 5 })
    );

    let response = app.send(Method::GET, "/5", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_item_is_not_found() {
    let app = TestApp::new(MemoryMenu::default());

    let response = app
        .send(Method::DELETE, "/5/delete", Some(app.session_cookie.clone()), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_requires_session() {
    let app = TestApp::new(MemoryMenu::with_items([menu_item(5, 1, "Pho")]));

    let response = app.send(Method::DELETE, "/5/delete", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.menu.get(5).is_some());
}

#[tokio::test]
async fn test_unconfirmed_delete_is_server_error() {
    let menu = MemoryMenu {
        stuck_deletes: true,
        ..MemoryMenu::with_items([menu_item(5, 1, "Pho")])
    };
    let app = TestApp::new(menu);

    let response = app
        .send(Method::DELETE, "/5/delete", Some(app.session_cookie.clone()), None)
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(json["detail"], "Failed to delete menu item");
}
