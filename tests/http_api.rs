//! End-to-end HTTP tests against the real router with the in-memory store.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use numerical_method_api::{
    build_router, AppState, MemoryRecordStore, Payload, Record, RecordStore, Registry, ResourceKind, StoreError,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const BODY_LIMIT: usize = 64 * 1024;

fn app_with(store: Arc<dyn RecordStore>) -> Router {
    let registry = Registry::builtin().unwrap_or_else(|err| panic!("registry: {err}"));
    build_router(AppState::new(store, registry), BODY_LIMIT)
}

fn app() -> Router {
    app_with(Arc::new(MemoryRecordStore::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap_or_else(|err| panic!("failed to build request: {err}"));
    let response = match app.clone().oneshot(request).await {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    };
    let status = response.status();
    (status, response_json(response).await)
}

async fn send_raw(app: &Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|err| panic!("failed to build request: {err}"));
    let response = match app.clone().oneshot(request).await {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    };
    let status = response.status();
    (status, response_json(response).await)
}

async fn response_json(response: Response) -> Value {
    let bytes = match to_bytes(response.into_body(), 1024 * 1024).await {
        Ok(bytes) => bytes,
        Err(err) => panic!("failed to read response body: {err}"),
    };
    if bytes.is_empty() {
        return Value::Null;
    }
    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(err) => panic!("response body is not JSON: {err}; body={}", String::from_utf8_lossy(&bytes)),
    }
}

fn bisection_body() -> Value {
    json!({ "equation": "x^2-4", "xl": 0, "xr": 3, "e": 0.001 })
}

#[tokio::test]
async fn bisection_create_then_fetch_returns_identical_record() {
    let app = app();
    let (status, created) = send(&app, "POST", "/numerical-method/root-of-equations/bisection", Some(bisection_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({ "id": 1, "equation": "x^2-4", "xl": 0.0, "xr": 3.0, "e": 0.001 })
    );

    let (status, fetched) = send(&app, "GET", "/numerical-method/root-of-equations/bisection/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn never_created_id_is_not_found() {
    let app = app();
    let (status, body) = send(&app, "GET", "/numerical-method/root-of-equations/bisection/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Bisection data not found" }));
}

#[tokio::test]
async fn successive_creates_get_distinct_ids() {
    let app = app();
    let mut ids = Vec::new();
    for _ in 0..3 {
        let (status, created) =
            send(&app, "POST", "/numerical-method/root-of-equations/bisection", Some(bisection_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(created["id"].as_i64().unwrap_or_default());
    }
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let app = app();
    let mut handles = Vec::new();
    for i in 0..16 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let body = json!({ "equation": format!("x-{i}"), "scan": 0.5 });
            send(&app, "POST", "/numerical-method/root-of-equations/graphical", Some(body)).await
        }));
    }
    let mut ids = Vec::new();
    for handle in handles {
        let (status, created) = handle.await.unwrap_or_else(|err| panic!("task failed: {err}"));
        assert_eq!(status, StatusCode::CREATED);
        ids.push(created["id"].as_i64().unwrap_or_default());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}

#[tokio::test]
async fn malformed_payload_is_rejected_and_not_persisted() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/numerical-method/root-of-equations/bisection",
        Some(json!({ "equation": "x^2-4", "xl": "zero", "xr": 3, "e": 0.001 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "body parser error");
    assert_eq!(body["error"], "field 'xl' must be a number");

    let (status, _) = send(&app, "GET", "/numerical-method/root-of-equations/bisection/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_field_and_broken_json_are_client_faults() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/numerical-method/integration/simpson",
        Some(json!({ "function": "x^2", "lower": 0, "upper": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing field 'interval'");

    let (status, body) = send_raw(&app, "/numerical-method/integration/simpson", "{\"function\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "body parser error");
}

#[tokio::test]
async fn missing_id_is_a_bad_request() {
    let app = app();
    for uri in [
        "/numerical-method/root-of-equations/bisection",
        "/numerical-method/root-of-equations/bisection/",
        "/numerical-method/numerical-diff/",
    ] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "message": "ID parameter is required" }), "{uri}");
    }
}

#[tokio::test]
async fn non_integer_id_is_a_bad_request() {
    let app = app();
    let (status, body) = send(&app, "GET", "/numerical-method/root-of-equations/secant/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid id");
}

#[tokio::test]
async fn unknown_kind_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/numerical-method/root-of-equations/golden-section",
        Some(bisection_body()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "unknown resource kind");

    let (status, _) = send(&app, "GET", "/numerical-method/no-such-family/thing/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn numerical_diff_is_addressed_by_family_alone() {
    let app = app();
    let body = json!({ "function": "e^x", "x": 2, "h": 0.25, "order": 1 });
    let (status, created) = send(&app, "POST", "/numerical-method/numerical-diff", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 1, "function": "e^x", "x": 2, "h": 0.25, "order": 1 }));

    let (status, fetched) = send(&app, "GET", "/numerical-method/numerical-diff/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = send(&app, "GET", "/numerical-method/numerical-diff/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Numerical diff data not found");
}

#[tokio::test]
async fn legacy_linear_algebra_path_shares_records() {
    let app = app();
    let body = json!({
        "matrix_size": 2,
        "e": 0.0001,
        "matrix_data": [[4, 1], [1, 3]],
        "constant_data": [1, 2]
    });
    let (status, created) = send(&app, "POST", "/numerical-method/linear-algrebra/jacobi-iteration", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["matrix_data"], json!([[4.0, 1.0], [1.0, 3.0]]));

    let (status, fetched) = send(&app, "GET", "/numerical-method/linear-algebra/jacobi-iteration/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn kinds_keep_separate_id_spaces() {
    let app = app();
    send(&app, "POST", "/numerical-method/root-of-equations/bisection", Some(bisection_body())).await;
    let (status, created) = send(
        &app,
        "POST",
        "/numerical-method/root-of-equations/false-position",
        Some(bisection_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, _) = send(&app, "GET", "/numerical-method/root-of-equations/one-point/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn regression_points_round_trip_as_opaque_strings() {
    let app = app();
    let body = json!({ "points": "1,2;2,4;3,6", "order": 2, "xvalue": 4.5 });
    let (status, created) = send(
        &app,
        "POST",
        "/numerical-method/least-squares-regression/polynomial-regression",
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["points"], "1,2;2,4;3,6");

    let (_, fetched) = send(
        &app,
        "GET",
        "/numerical-method/least-squares-regression/polynomial-regression/1",
        None,
    )
    .await;
    assert_eq!(fetched, created);
}

struct BrokenStore;

#[async_trait]
impl RecordStore for BrokenStore {
    async fn insert(&self, _payload: &Payload) -> Result<Record, StoreError> {
        Err(StoreError::Unavailable("password authentication failed for user \"admin\"".into()))
    }

    async fn find_by_id(&self, _kind: &'static ResourceKind, _id: i64) -> Result<Option<Record>, StoreError> {
        Err(StoreError::Unavailable("password authentication failed for user \"admin\"".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[tokio::test]
async fn store_faults_return_generic_server_errors() {
    let app = app_with(Arc::new(BrokenStore));
    let (status, body) = send(&app, "POST", "/numerical-method/root-of-equations/bisection", Some(bisection_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to save data to the database" }));

    let (status, body) = send(&app, "GET", "/numerical-method/root-of-equations/newton-raphson/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Error fetching newton raphson data" }));
    assert!(!body.to_string().contains("admin"));
}

#[tokio::test]
async fn store_faults_do_not_mask_validation() {
    let app = app_with(Arc::new(BrokenStore));
    let (status, _) = send(
        &app,
        "POST",
        "/numerical-method/root-of-equations/bisection",
        Some(json!({ "equation": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/numerical-method/root-of-equations/bisection/", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn readiness_reflects_store_health() {
    let (status, body) = send(&app(), "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
    assert_eq!(body["resource_kinds"], 25);

    let (status, body) = send(&app_with(Arc::new(BrokenStore)), "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");

    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_resource_routes() {
    let (status, doc) = send(&app(), "GET", "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/numerical-method/interpolation/quadratic-lagrange"]["post"].is_object());
    assert!(doc["paths"]["/numerical-method/interpolation/quadratic-lagrange/{id}"]["get"].is_object());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = app();
    let big = "x".repeat(BODY_LIMIT + 1);
    let body = json!({ "equation": big, "e": 0.1 });
    let request = Request::builder()
        .method("POST")
        .uri("/numerical-method/root-of-equations/one-point")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|err| panic!("failed to build request: {err}"));
    let response = match app.oneshot(request).await {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    };
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn single_kind_family_without_id_is_a_bad_request() {
    let (status, body) = send(&app(), "GET", "/numerical-method/numerical-diff", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "ID parameter is required" }));
}

#[tokio::test]
async fn unrouted_paths_and_methods_get_the_envelope() {
    let app = app();
    let (status, body) = send(&app, "GET", "/numerical-method/no-such", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "unknown resource kind" }));

    let (status, body) = send(
        &app,
        "POST",
        "/numerical-method/root-of-equations/bisection/1",
        Some(bisection_body()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "unknown resource kind" }));

    let (status, body) = send(&app, "GET", "/numerical-method/a/b/c/d", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "unknown resource kind");
}

#[tokio::test]
async fn undecodable_id_segment_is_a_json_bad_request() {
    let (status, body) = send(&app(), "GET", "/numerical-method/root-of-equations/bisection/%FF", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid path");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_segment_under_named_family_is_not_found() {
    let (status, body) = send(&app(), "GET", "/numerical-method/root-of-equations/golden-section", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "unknown resource kind" }));
}
