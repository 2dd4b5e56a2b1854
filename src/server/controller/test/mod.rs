use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Creates an in-memory database with every table and the router serving it.
async fn setup() -> (DatabaseConnection, Router) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.unwrap();

    let app = router().with_state(AppState::new(db.clone()));

    (db, app)
}

/// Sends a request through the router and decodes the JSON response body.
///
/// Bodies that are not JSON decode to `Value::Null`.
async fn send(app: Router, method: Method, uri: &str, body: Option<Body>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header(header::CONTENT_TYPE, "application/json");
    }
    let request = request.body(body.unwrap_or_else(Body::empty)).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(Body::from(body.to_string()))).await
}

/// Collects the `field` names of a 422 response body.
fn failing_fields(body: &Value) -> Vec<String> {
    body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|field| field["field"].as_str().unwrap().to_string())
        .collect()
}
