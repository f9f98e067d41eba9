//! HTTP-level tests driving the full router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use club_server::{api, Config, ServerState};

async fn setup_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("clube.db");
    let config = Config::with_overrides(db_path.to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    (dir, api::build_app().with_state(state))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ana() -> Value {
    json!({
        "name": "Ana",
        "tax_id": "111.111.111-11",
        "birth_date": "1990-05-01"
    })
}

#[tokio::test]
async fn member_and_dependent_scenario() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(&app, "POST", "/api/members", Some(ana())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert!(body["message"].as_str().unwrap().contains("created"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/dependents",
        Some(json!({
            "member_id": 1,
            "name": "Bia",
            "tax_id": "222.222.222-22",
            "birth_date": "2015-03-02",
            "relationship": "Filha"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = send(&app, "GET", "/api/dependents/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["member_id"], 1);
    assert_eq!(list[0]["name"], "Bia");
    assert_eq!(list[0]["birth_date"], "2015-03-02");
    assert_eq!(list[0]["relationship"], "Filha");
}

#[tokio::test]
async fn member_list_round_trips_dates_and_defaults() {
    let (_dir, app) = setup_app().await;

    send(&app, "POST", "/api/members", Some(ana())).await;

    let (status, body) = send(&app, "GET", "/api/members", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[0]["tax_id"], "111.111.111-11");
    assert_eq!(list[0]["birth_date"], "1990-05-01");
    assert_eq!(list[0]["payment_status"], "Pending");
    assert_eq!(list[0]["street"], Value::Null);
}

#[tokio::test]
async fn duplicate_tax_id_is_a_client_error() {
    let (_dir, app) = setup_app().await;

    send(&app, "POST", "/api/members", Some(ana())).await;
    let (status, body) = send(&app, "POST", "/api/members", Some(ana())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("tax_id"));

    // Nothing persisted by the failed create
    let (_, body) = send(&app, "GET", "/api/members", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_required_field_is_a_client_error() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(json!({ "tax_id": "111.111.111-11", "birth_date": "1990-05-01" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_date_is_a_client_error() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(json!({
            "name": "Ana",
            "tax_id": "111.111.111-11",
            "birth_date": "01/05/1990"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn payment_registration_omits_id_from_body() {
    let (_dir, app) = setup_app().await;

    send(&app, "POST", "/api/members", Some(ana())).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        Some(json!({
            "member_id": 1,
            "amount": 150.0,
            "payment_date": "2024-07-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["message"].is_string());
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn payment_for_unknown_member_is_a_client_error() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        Some(json!({
            "member_id": 999,
            "amount": 150.0,
            "payment_date": "2024-07-01"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn attendance_timestamps_use_the_wire_format() {
    let (_dir, app) = setup_app().await;

    send(&app, "POST", "/api/members", Some(ana())).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(json!({ "member_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("id").is_none());

    let (status, body) = send(&app, "GET", "/api/attendances/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["member_id"], 1);
    let entry_at = list[0]["entry_at"].as_str().unwrap();
    chrono::NaiveDateTime::parse_from_str(entry_at, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|e| panic!("bad entry_at {entry_at:?}: {e}"));
}

#[tokio::test]
async fn listing_by_unknown_member_is_empty_not_an_error() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(&app, "GET", "/api/attendances/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = send(&app, "GET", "/api/dependents/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn staff_create_and_list() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/staff",
        Some(json!({
            "name": "Carlos Lima",
            "tax_id": "444.444.444-44",
            "role": "Recepcionista",
            "city": "Campinas"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = send(&app, "GET", "/api/staff", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["role"], "Recepcionista");
    assert_eq!(list[0]["city"], "Campinas");
}

#[tokio::test]
async fn health_reports_database_ok() {
    let (_dir, app) = setup_app().await;

    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}
