//! Router tests driving the full middleware stack with `oneshot` over the
//! in-memory repository.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::app;

// =============================================================================
// Test Helpers
// =============================================================================

fn employee_body(doc_number: &str, role: &str) -> Value {
    json!({
        "first_name": "Joana",
        "last_name": "Pereira",
        "email": format!("{}@example.com", doc_number),
        "doc_number": doc_number,
        "birth_date": "1991-07-04",
        "role": role,
        "password": "Admin@123",
        "phones": [{ "number": "+55 21 97777-6666", "type": "work" }]
    })
}

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Register through the API and return the bearer token and employee id
async fn register(app: &Router, doc_number: &str, role: &str) -> (String, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(employee_body(doc_number, role)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    (
        body["token"]["access_token"].as_str().unwrap().to_string(),
        body["employee"]["id"].as_str().unwrap().to_string(),
    )
}

// =============================================================================
// Public Endpoints
// =============================================================================

#[tokio::test]
async fn health_reports_database_status() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn register_returns_token_and_projection() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(employee_body("10", "director")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["token"]["token_type"], "Bearer");
    assert_eq!(body["employee"]["role"], "director");
    assert_eq!(body["employee"]["full_name"], "Joana Pereira");
    assert!(body["employee"].get("password_hash").is_none());
}

#[tokio::test]
async fn register_twice_conflicts() {
    let (app, _) = app();
    register(&app, "11", "employee").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(employee_body("11", "employee")),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn register_minor_is_rejected_with_domain_code() {
    let (app, _) = app();
    let mut body = employee_body("12", "employee");
    body["birth_date"] = json!(chrono::Utc::now().date_naive().to_string());

    let (status, body) = send(&app, Method::POST, "/auth/register", None, Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "AGE_VIOLATION");
}

#[tokio::test]
async fn short_password_fails_validation() {
    let (app, _) = app();
    let mut body = employee_body("13", "employee");
    body["password"] = json!("short");

    let (status, body) = send(&app, Method::POST, "/auth/register", None, Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (app, _) = app();
    register(&app, "14", "employee").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "doc_number": "14", "password": "Nope@1234" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

// =============================================================================
// Protected Endpoints
// =============================================================================

#[tokio::test]
async fn employee_routes_require_token() {
    let (app, _) = app();

    let (status, _) = send(&app, Method::GET, "/employees", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/employees", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn director_creates_leader_but_employee_is_forbidden() {
    let (app, store) = app();
    let (director, _) = register(&app, "20", "director").await;
    let (employee, _) = register(&app, "21", "employee").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(&director),
        Some(employee_body("22", "leader")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["employee"]["id"].is_string());
    assert!(body["employee"].get("password_hash").is_none());

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(&employee),
        Some(employee_body("23", "leader")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn me_and_list_return_projections() {
    let (app, _) = app();
    let (token, id) = register(&app, "30", "leader").await;
    register(&app, "31", "employee").await;

    let (status, me) = send(&app, Method::GET, "/employees/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], id.as_str());

    let (status, page) = send(&app, Method::GET, "/employees?page=1&per_page=1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["data"].as_array().unwrap().len(), 1);
    assert_eq!(page["meta"]["total"], 2);
    assert_eq!(page["meta"]["total_pages"], 2);
}

#[tokio::test]
async fn out_of_range_page_returns_empty_page() {
    let (app, _) = app();
    let (token, _) = register(&app, "32", "employee").await;

    let (status, page) = send(
        &app,
        Method::GET,
        "/employees?page=18446744073709551615&per_page=100",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(page["data"].as_array().unwrap().is_empty());
    assert_eq!(page["meta"]["total"], 1);
}

#[tokio::test]
async fn update_replaces_phones_and_delete_returns_no_content() {
    let (app, _) = app();
    let (leader, _) = register(&app, "40", "leader").await;
    let (_, target) = register(&app, "41", "employee").await;
    let uri = format!("/employees/{}", target);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&leader),
        Some(json!({
            "first_name": "Joana",
            "last_name": "Prado",
            "birth_date": "1991-07-04",
            "manager_id": null,
            "new_role": "leader",
            "phones": [{ "number": "+55 21 2222-0000", "type": "home" }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["full_name"], "Joana Prado");
    assert_eq!(body["role"], "leader");
    assert_eq!(body["phones"], json!([{ "number": "+55 21 2222-0000", "type": "home" }]));

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&leader), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, &uri, Some(&leader), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_without_phones_is_rejected() {
    let (app, _) = app();
    let (token, id) = register(&app, "50", "employee").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/employees/{}", id),
        Some(&token),
        Some(json!({
            "first_name": "Joana",
            "last_name": "Pereira",
            "birth_date": "1991-07-04",
            "phones": []
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_PHONE");
}
