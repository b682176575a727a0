//! Employee CRUD integration tests
//!
//! All employee routes sit behind the request gate, so every request here
//! carries a session cookie obtained through a real login.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use directory_server::core::Config;
use directory_server::services::provision;
use directory_server::{AppState, api};
use shared::models::AdminCreate;

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin123";

async fn test_app() -> (Router, String, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let config = Config::with_overrides(db_path.to_string_lossy(), 0, "test-secret");
    let state = AppState::new(config).await.expect("Failed to initialize state");

    provision::create_admin(
        &state.pool,
        AdminCreate {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            name: "Test Admin".to_string(),
        },
    )
    .await
    .expect("Failed to create admin");

    let app = api::build_app(state);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("missing Set-Cookie header")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    (app, cookie, dir)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_json(method: &str, uri: &str, cookie: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_get(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("body is not JSON")
}

fn ann() -> Value {
    json!({
        "name": "Ann",
        "email": "ann@x.com",
        "position": "Eng",
        "startDate": "2023-01-01"
    })
}

#[tokio::test]
async fn test_create_list_delete_round_trip() {
    let (app, cookie, _dir) = test_app().await;

    // Create
    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, ann()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().expect("id is not a number");
    assert_eq!(created["name"], "Ann");
    assert_eq!(created["email"], "ann@x.com");
    assert_eq!(created["startDate"], "2023-01-01");
    assert!(created["department"].is_null());

    // Duplicate email conflicts
    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, ann()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["message"], "This email address is already in use.");

    // List shows exactly one record
    let response = app
        .clone()
        .oneshot(authed_get("/api/employees", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["id"], id);

    // Get by id
    let response = app
        .clone()
        .oneshot(authed_get(&format!("/api/employees/{id}"), &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Delete
    let response = app
        .clone()
        .oneshot(authed_json(
            "DELETE",
            &format!("/api/employees/{id}"),
            &cookie,
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Employee deleted successfully");

    // Gone
    let response = app
        .clone()
        .oneshot(authed_get(&format!("/api/employees/{id}"), &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Employee not found");
}

#[tokio::test]
async fn test_create_rejects_missing_fields() {
    let (app, cookie, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Missing required fields: name, email, position, startDate are required."
    );

    // Blank values count as missing; only the absent ones are listed
    let response = app
        .clone()
        .oneshot(authed_json(
            "POST",
            "/api/employees",
            &cookie,
            json!({"name": "  ", "email": "b@x.com", "position": "Eng", "startDate": "2023-01-01"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Missing required fields: name are required.");
}

#[tokio::test]
async fn test_create_rejects_unparsable_date() {
    let (app, cookie, _dir) = test_app().await;

    let mut payload = ann();
    payload["startDate"] = json!("not-a-date");

    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Employee start date is invalid");
}

#[tokio::test]
async fn test_create_duplicate_email_is_case_insensitive() {
    let (app, cookie, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, ann()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut payload = ann();
    payload["email"] = json!("ANN@X.COM");

    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_changes_only_present_fields() {
    let (app, cookie, _dir) = test_app().await;

    let mut payload = ann();
    payload["department"] = json!("Engineering");
    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    // Only position in the body: everything else stays
    let response = app
        .clone()
        .oneshot(authed_json(
            "PUT",
            &format!("/api/employees/{id}"),
            &cookie,
            json!({"position": "Staff Engineer"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["position"], "Staff Engineer");
    assert_eq!(updated["name"], "Ann");
    assert_eq!(updated["department"], "Engineering");

    // Explicitly empty department overwrites; absent fields still stay
    let response = app
        .clone()
        .oneshot(authed_json(
            "PUT",
            &format!("/api/employees/{id}"),
            &cookie,
            json!({"department": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["department"], "");
    assert_eq!(updated["position"], "Staff Engineer");
}

#[tokio::test]
async fn test_update_rejects_empty_start_date() {
    let (app, cookie, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, ann()))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    // startDate cannot be cleared, only replaced with a valid date
    let response = app
        .clone()
        .oneshot(authed_json(
            "PUT",
            &format!("/api/employees/{id}"),
            &cookie,
            json!({"startDate": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(authed_json(
            "PUT",
            &format!("/api/employees/{id}"),
            &cookie,
            json!({"startDate": "2024-06-01"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["startDate"], "2024-06-01");
}

#[tokio::test]
async fn test_update_duplicate_email_conflicts() {
    let (app, cookie, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, ann()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(authed_json(
            "POST",
            "/api/employees",
            &cookie,
            json!({"name": "Bob", "email": "bob@x.com", "position": "Eng", "startDate": "2023-02-01"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bob_id = body_json(response).await["id"].as_i64().unwrap();

    // Case-folded collision with Ann's email
    let response = app
        .clone()
        .oneshot(authed_json(
            "PUT",
            &format!("/api/employees/{bob_id}"),
            &cookie,
            json!({"email": "ANN@X.COM"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "This email address is already in use by another employee."
    );

    // Writing its own email back is not a conflict
    let response = app
        .clone()
        .oneshot(authed_json(
            "PUT",
            &format!("/api/employees/{bob_id}"),
            &cookie,
            json!({"email": "bob@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_and_delete_missing_employee_not_found() {
    let (app, cookie, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(authed_json(
            "PUT",
            "/api/employees/999999",
            &cookie,
            json!({"name": "Ghost"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(authed_json(
            "DELETE",
            "/api/employees/999999",
            &cookie,
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employee_json_uses_camel_case() {
    let (app, cookie, _dir) = test_app().await;

    let mut payload = ann();
    payload["photoUrl"] = json!("https://example.com/ann.jpg");

    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;

    assert_eq!(created["photoUrl"], "https://example.com/ann.jpg");
    assert!(created.get("startDate").is_some());
    assert!(created.get("createdAt").is_some());
    assert!(created.get("updatedAt").is_some());
    assert!(created.get("photo_url").is_none());
    assert!(created.get("start_date").is_none());
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let (app, cookie, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, ann()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Millisecond timestamps decide the order, so space the creates out
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let response = app
        .clone()
        .oneshot(authed_json(
            "POST",
            "/api/employees",
            &cookie,
            json!({"name": "Bob", "email": "bob@x.com", "position": "Eng", "startDate": "2023-02-01"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(authed_get("/api/employees", &cookie))
        .await
        .unwrap();
    let list = body_json(response).await;
    assert_eq!(list.as_array().map(Vec::len), Some(2));
    assert_eq!(list[0]["name"], "Bob");
    assert_eq!(list[1]["name"], "Ann");
}

#[tokio::test]
async fn test_oversized_photo_rejected() {
    let (app, cookie, _dir) = test_app().await;

    let mut payload = ann();
    payload["photoUrl"] = json!("x".repeat(2 * 1024 * 1024 + 1));

    let response = app
        .clone()
        .oneshot(authed_json("POST", "/api/employees", &cookie, payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Employee photo exceeds the size cap");
}
