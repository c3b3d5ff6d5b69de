// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test fixtures: an in-process stub of the store backend.
//!
//! The stub serves the real endpoint surface on an ephemeral port with
//! in-memory users, tokens, products, and favorites, plus request counters
//! so tests can assert that an operation issued no request at all.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use favmark::config::Config;
use favmark::App;

/// A running stub backend.
pub struct StubServer {
    pub base_url: String,
    pub state: Arc<StubState>,
}

#[derive(Default)]
pub struct StubState {
    inner: Mutex<Inner>,
    /// GET /api/auth/me calls observed.
    pub me_requests: AtomicUsize,
    /// GET /api/users/{id}/favorites calls observed.
    pub favorites_list_requests: AtomicUsize,
    /// GET /api/products calls observed.
    pub product_requests: AtomicUsize,
}

#[derive(Default)]
struct Inner {
    users: Vec<StubUser>,
    tokens: HashMap<String, i64>,
    products: Vec<(i64, String)>,
    favorites: Vec<StubFavorite>,
    next_user_id: i64,
    next_favorite_id: i64,
    next_token: u64,
    /// When set, favorites list/create/delete all return 500.
    fail_favorites: bool,
}

struct StubUser {
    id: i64,
    username: String,
    password: String,
}

#[derive(Clone, Copy)]
struct StubFavorite {
    id: i64,
    user_id: i64,
    product_id: i64,
}

impl StubServer {
    /// Bind an ephemeral port and serve the stub in the background.
    pub async fn spawn() -> Self {
        let state = Arc::new(StubState::default());

        let router = Router::new()
            .route("/api/auth/register", post(register))
            .route("/api/auth/login", post(login))
            .route("/api/auth/me", get(me))
            .route("/api/products", get(products))
            .route(
                "/api/users/{user_id}/favorites",
                get(favorites_list).post(favorites_create),
            )
            .route(
                "/api/users/{user_id}/favorites/{favorite_id}",
                axum::routing::delete(favorites_delete),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub serve");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Create a user directly, bypassing the register endpoint.
    #[allow(dead_code)]
    pub fn seed_user(&self, username: &str, password: &str) -> i64 {
        let mut inner = self.state.inner.lock().unwrap();
        inner.next_user_id += 1;
        let id = inner.next_user_id;
        inner.users.push(StubUser {
            id,
            username: username.to_string(),
            password: password.to_string(),
        });
        id
    }

    /// Issue a valid token for a user, as if they had logged in.
    #[allow(dead_code)]
    pub fn issue_token(&self, user_id: i64) -> String {
        let mut inner = self.state.inner.lock().unwrap();
        inner.next_token += 1;
        let token = format!("tok-{}-{}", user_id, inner.next_token);
        inner.tokens.insert(token.clone(), user_id);
        token
    }

    #[allow(dead_code)]
    pub fn seed_product(&self, name: &str) -> i64 {
        let mut inner = self.state.inner.lock().unwrap();
        let id = inner.products.len() as i64 + 1;
        inner.products.push((id, name.to_string()));
        id
    }

    /// Server-side favorites for a user, as (favorite_id, product_id).
    #[allow(dead_code)]
    pub fn favorites_for(&self, user_id: i64) -> Vec<(i64, i64)> {
        let inner = self.state.inner.lock().unwrap();
        inner
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| (f.id, f.product_id))
            .collect()
    }

    /// Force all favorites endpoints to fail with 500.
    #[allow(dead_code)]
    pub fn set_fail_favorites(&self, fail: bool) {
        self.state.inner.lock().unwrap().fail_favorites = fail;
    }

    #[allow(dead_code)]
    pub fn user_exists(&self, username: &str) -> bool {
        let inner = self.state.inner.lock().unwrap();
        inner.users.iter().any(|u| u.username == username)
    }
}

/// Unique token-file path under the system temp dir.
#[allow(dead_code)]
pub fn temp_token_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "favmark-test-{}-{}-{:?}.json",
        tag,
        std::process::id(),
        std::thread::current().id()
    ))
}

/// An App pointed at the stub, with its own token file.
#[allow(dead_code)]
pub fn test_app(server: &StubServer, tag: &str) -> (App, Config) {
    let config = Config {
        api_url: server.base_url.clone(),
        token_path: temp_token_path(tag),
    };
    (App::new(&config), config)
}

// --- handlers ---

fn bearer_user(inner: &Inner, headers: &HeaderMap) -> Option<i64> {
    let token = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    inner.tokens.get(token).copied()
}

async fn register(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let username = body["username"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();
    if username.is_empty() || password.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "missing fields"})));
    }

    let mut inner = state.inner.lock().unwrap();
    if inner.users.iter().any(|u| u.username == username) {
        return (StatusCode::CONFLICT, Json(json!({"error": "username taken"})));
    }
    inner.next_user_id += 1;
    let id = inner.next_user_id;
    inner.users.push(StubUser {
        id,
        username: username.clone(),
        password,
    });
    (StatusCode::CREATED, Json(json!({"id": id, "username": username})))
}

async fn login(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let mut inner = state.inner.lock().unwrap();
    let Some(user_id) = inner
        .users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .map(|u| u.id)
    else {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "wrong credentials"})));
    };

    inner.next_token += 1;
    let token = format!("tok-{}-{}", user_id, inner.next_token);
    inner.tokens.insert(token.clone(), user_id);
    (StatusCode::OK, Json(json!({"token": token})))
}

async fn me(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.me_requests.fetch_add(1, Ordering::SeqCst);
    let inner = state.inner.lock().unwrap();
    match bearer_user(&inner, &headers) {
        Some(user_id) => {
            let user = inner.users.iter().find(|u| u.id == user_id).unwrap();
            (
                StatusCode::OK,
                Json(json!({"id": user.id, "username": user.username})),
            )
        }
        None => (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid token"}))),
    }
}

async fn products(State(state): State<Arc<StubState>>) -> Json<Value> {
    state.product_requests.fetch_add(1, Ordering::SeqCst);
    let inner = state.inner.lock().unwrap();
    let products: Vec<Value> = inner
        .products
        .iter()
        .map(|(id, name)| json!({"id": id, "name": name}))
        .collect();
    Json(Value::Array(products))
}

async fn favorites_list(
    State(state): State<Arc<StubState>>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.favorites_list_requests.fetch_add(1, Ordering::SeqCst);
    let inner = state.inner.lock().unwrap();
    if inner.fail_favorites {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"})));
    }
    if bearer_user(&inner, &headers) != Some(user_id) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid token"})));
    }
    let favorites: Vec<Value> = inner
        .favorites
        .iter()
        .filter(|f| f.user_id == user_id)
        .map(|f| json!({"id": f.id, "product_id": f.product_id}))
        .collect();
    (StatusCode::OK, Json(Value::Array(favorites)))
}

async fn favorites_create(
    State(state): State<Arc<StubState>>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut inner = state.inner.lock().unwrap();
    if inner.fail_favorites {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"})));
    }
    if bearer_user(&inner, &headers) != Some(user_id) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid token"})));
    }
    let Some(product_id) = body["product_id"].as_i64() else {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "missing product_id"})));
    };

    inner.next_favorite_id += 1;
    let favorite = StubFavorite {
        id: inner.next_favorite_id,
        user_id,
        product_id,
    };
    inner.favorites.push(favorite);
    (
        StatusCode::CREATED,
        Json(json!({"id": favorite.id, "product_id": favorite.product_id})),
    )
}

async fn favorites_delete(
    State(state): State<Arc<StubState>>,
    Path((user_id, favorite_id)): Path<(i64, i64)>,
    headers: HeaderMap,
) -> StatusCode {
    let mut inner = state.inner.lock().unwrap();
    if inner.fail_favorites {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    if bearer_user(&inner, &headers) != Some(user_id) {
        return StatusCode::UNAUTHORIZED;
    }
    let before = inner.favorites.len();
    inner
        .favorites
        .retain(|f| !(f.user_id == user_id && f.id == favorite_id));
    if inner.favorites.len() == before {
        return StatusCode::NOT_FOUND;
    }
    StatusCode::NO_CONTENT
}
