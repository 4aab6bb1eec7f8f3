//! In-process fake of the storefront REST API.
//!
//! Serves the same routes as the real backend under `/api`, backed by an
//! in-memory store, on an ephemeral `127.0.0.1` port.

#![allow(dead_code)]

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Category id whose menu endpoint answers 200 with a non-JSON body
pub const GARBLED_CATEGORY: i64 = 98;
/// Category id whose menu endpoint answers 500
pub const BROKEN_CATEGORY: i64 = 99;
/// Category id whose delete answers 200 instead of 204
pub const LEGACY_DELETE_CATEGORY: i64 = 7;

#[derive(Default)]
pub struct Inner {
    pub categories: Vec<Value>,
    pub menus: Vec<Value>,
    pub cart: Vec<Value>,
    pub next_id: i64,
    /// Text fields of the last multipart menu upload
    pub uploaded_fields: HashMap<String, String>,
    /// (file name, content type, byte count) of the last uploaded image
    pub uploaded_image: Option<(String, String, usize)>,
    /// Request log as "METHOD path"
    pub requests: Vec<String>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    pub inner: Arc<Mutex<Inner>>,
}

impl FakeApi {
    /// Seed data: Drinks (Tea) and Food (Rice), cart empty.
    pub fn seeded() -> Self {
        let api = FakeApi::default();
        {
            let mut inner = api.inner.lock();
            inner.categories = vec![
                json!({"id": 1, "name": "Drinks", "status": "Active"}),
                json!({"id": 2, "name": "Food", "status": "active"}),
                json!({"id": LEGACY_DELETE_CATEGORY, "name": "Legacy", "status": "Inactive"}),
            ];
            inner.menus = vec![
                menu_json(10, "Tea", 1, "Drinks", json!("5000.00")),
                menu_json(20, "Fried Rice", 2, "Food", json!(12000)),
            ];
            inner.next_id = 100;
        }
        api
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().requests.clone()
    }

    fn log(&self, request: String) {
        self.inner.lock().requests.push(request);
    }
}

pub fn menu_json(id: i64, name: &str, category_id: i64, category: &str, price: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} of the day", name),
        "category": {"id": category_id, "name": category, "status": "Active"},
        "image": format!("menus/{}.jpg", id),
        "price": price,
        "stock": 4,
        "status": "active",
    })
}

/// Start the fake API and return its base URL (`http://127.0.0.1:<port>/api`).
pub async fn spawn(api: FakeApi) -> String {
    let routes = Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
        .route("/menus", get(list_menus).post(create_menu))
        .route("/menus/category/{id}", get(list_menus_by_category))
        .route("/carts", get(list_cart).post(add_to_cart))
        .route("/carts/{id}", delete(remove_from_cart))
        .with_state(api);

    let app = Router::new().nest("/api", routes);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

/// Base URL of a port with nothing listening on it.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

async fn list_categories(State(api): State<FakeApi>) -> Json<Value> {
    api.log("GET /categories".to_string());
    Json(Value::Array(api.inner.lock().categories.clone()))
}

async fn create_category(State(api): State<FakeApi>, Json(body): Json<Value>) -> Response {
    api.log("POST /categories".to_string());

    let name = body["name"].as_str().unwrap_or_default().to_string();
    if name == "duplicate" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"message": "name already taken"})),
        )
            .into_response();
    }

    let mut inner = api.inner.lock();
    inner.next_id += 1;
    let created = json!({"id": inner.next_id, "name": name, "status": body["status"].clone()});
    inner.categories.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn delete_category(State(api): State<FakeApi>, Path(id): Path<i64>) -> StatusCode {
    api.log(format!("DELETE /categories/{}", id));
    if id == LEGACY_DELETE_CATEGORY {
        return StatusCode::OK;
    }

    let mut inner = api.inner.lock();
    let before = inner.categories.len();
    inner.categories.retain(|c| c["id"] != json!(id));
    if inner.categories.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn list_menus(State(api): State<FakeApi>) -> Json<Value> {
    api.log("GET /menus".to_string());
    Json(Value::Array(api.inner.lock().menus.clone()))
}

async fn list_menus_by_category(State(api): State<FakeApi>, Path(id): Path<i64>) -> Response {
    api.log(format!("GET /menus/category/{}", id));
    match id {
        GARBLED_CATEGORY => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        BROKEN_CATEGORY => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => {
            let items: Vec<Value> = api
                .inner
                .lock()
                .menus
                .iter()
                .filter(|m| m["category"]["id"] == json!(id))
                .cloned()
                .collect();
            Json(Value::Array(items)).into_response()
        }
    }
}

async fn create_menu(State(api): State<FakeApi>, mut multipart: Multipart) -> Response {
    api.log("POST /menus".to_string());

    let mut fields = HashMap::new();
    let mut image = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await.unwrap_or_default();
            image = Some((file_name, content_type, bytes.len()));
        } else {
            fields.insert(name, field.text().await.unwrap_or_default());
        }
    }

    let Some((file_name, _, _)) = image.clone() else {
        return (StatusCode::BAD_REQUEST, "image required").into_response();
    };

    let mut inner = api.inner.lock();
    inner.next_id += 1;
    let category_id: i64 = fields["category_id"].parse().unwrap_or_default();
    let mut created = menu_json(
        inner.next_id,
        &fields["name"],
        category_id,
        "Drinks",
        json!(fields["price"].clone()),
    );
    created["image"] = json!(format!("menus/{}", file_name));
    inner.menus.push(created.clone());
    inner.uploaded_fields = fields;
    inner.uploaded_image = image;
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn list_cart(State(api): State<FakeApi>) -> Json<Value> {
    api.log("GET /carts".to_string());
    Json(Value::Array(api.inner.lock().cart.clone()))
}

async fn add_to_cart(State(api): State<FakeApi>, Json(body): Json<Value>) -> Response {
    api.log("POST /carts".to_string());

    let mut inner = api.inner.lock();
    inner.next_id += 1;
    let mut created = body;
    created["id"] = json!(inner.next_id);
    inner.cart.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn remove_from_cart(State(api): State<FakeApi>, Path(id): Path<i64>) -> StatusCode {
    api.log(format!("DELETE /carts/{}", id));

    let mut inner = api.inner.lock();
    let before = inner.cart.len();
    inner.cart.retain(|e| e["id"] != json!(id));
    if inner.cart.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}
