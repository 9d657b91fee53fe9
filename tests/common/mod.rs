#[allow(dead_code)]
pub mod capture;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use usermgmt::modules::users::model::User;
use usermgmt::modules::users::store::{StoreError, UserStore};
use usermgmt::router::init_router;
use usermgmt::state::AppState;
use usermgmt_config::{AuthConfig, CorsConfig, UsersConfig};

pub const TOKEN: &str = "Bearer secret";

pub fn test_state(users_config: UsersConfig) -> AppState {
    AppState::new(users_config, AuthConfig::default(), CorsConfig::default())
}

pub fn setup_test_app() -> Router {
    init_router(test_state(UsersConfig::default()))
}

#[allow(dead_code)]
pub fn setup_test_app_with(users_config: UsersConfig) -> Router {
    init_router(test_state(users_config))
}

/// Store whose lock is permanently broken.
#[allow(dead_code)]
pub struct PoisonedStore;

impl UserStore for PoisonedStore {
    fn list(&self) -> Result<Vec<User>, StoreError> {
        Err(StoreError::Poisoned)
    }

    fn get(&self, _id: i64) -> Result<Option<User>, StoreError> {
        Err(StoreError::Poisoned)
    }

    fn insert(&self, _name: String, _email: String) -> Result<User, StoreError> {
        Err(StoreError::Poisoned)
    }

    fn update(&self, _id: i64, _name: String, _email: String) -> Result<User, StoreError> {
        Err(StoreError::Poisoned)
    }

    fn delete(&self, _id: i64) -> Result<(), StoreError> {
        Err(StoreError::Poisoned)
    }
}

#[allow(dead_code)]
pub fn setup_poisoned_app() -> Router {
    let state = AppState::with_store(
        Arc::new(PoisonedStore),
        UsersConfig::default(),
        AuthConfig::default(),
        CorsConfig::default(),
    );
    init_router(state)
}

pub fn request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", TOKEN);

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, body)
}
