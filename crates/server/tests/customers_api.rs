use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{build_router, customers::ServerState};
use service::customer::repository::{mock::MockCustomerRepository, CustomerRepository};
use service::customer::CustomerService;

fn app() -> axum::Router {
    let repo: Arc<dyn CustomerRepository> = Arc::new(MockCustomerRepository::default());
    let state = ServerState { customers: Arc::new(CustomerService::new(repo)) };
    build_router(state, CorsLayer::very_permissive())
}

async fn send_json(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
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
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

fn alice() -> Value {
    json!({
        "name": "Alice",
        "age": 30,
        "mobile_number": "111",
        "email_address": "a@x.com",
        "address": "Addr1"
    })
}

#[tokio::test]
async fn health_answers_ok() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_then_get_round_trips_through_http() {
    let app = app();

    let (status, body) = send_json(&app, Method::POST, "/customers", Some(alice())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "200");
    let id = body["data"]["id"].as_i64().expect("generated id");
    assert!(id > 0);
    assert_eq!(body["data"]["name"], "Alice");
    assert_eq!(body["data"]["age"], 30);

    let (status, fetched) = send_json(&app, Method::GET, &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["code"], "200");
    assert_eq!(fetched["data"], body["data"]);
}

#[tokio::test]
async fn get_missing_id_is_http_200_with_not_found_code() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/customers/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "404");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn update_overwrites_and_missing_fields_become_blank() {
    let app = app();
    let (_, created) = send_json(&app, Method::POST, "/customers", Some(alice())).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Only the name is supplied; the other four fields must be overwritten
    // with their blank/zero defaults.
    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/customers/{id}"),
        Some(json!({ "name": "Alice Smith" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "200");
    assert_eq!(body["data"]["name"], "Alice Smith");
    assert_eq!(body["data"]["age"], 0);
    assert_eq!(body["data"]["mobile_number"], "");
    assert_eq!(body["data"]["email_address"], "");
    assert_eq!(body["data"]["address"], "");
}

#[tokio::test]
async fn update_missing_id_reports_not_found() {
    let app = app();
    let (status, body) = send_json(&app, Method::PUT, "/customers/77", Some(alice())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "404");
}

#[tokio::test]
async fn delete_then_get_reports_not_found() {
    let app = app();
    let (_, created) = send_json(&app, Method::POST, "/customers", Some(alice())).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, deleted) = send_json(&app, Method::DELETE, &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["code"], "200");
    assert_eq!(deleted["data"], json!([]));

    let (_, after) = send_json(&app, Method::GET, &format!("/customers/{id}"), None).await;
    assert_eq!(after["code"], "404");
}

#[tokio::test]
async fn paging_and_sorting_flows() {
    let app = app();
    for (name, age) in [("Cherry", 35), ("Apple", 22), ("Banana", 29)] {
        let body = json!({
            "name": name,
            "age": age,
            "mobile_number": "0",
            "email_address": "x@example.com",
            "address": "A"
        });
        send_json(&app, Method::POST, "/customers", Some(body)).await;
    }

    let (status, page) = send_json(&app, Method::GET, "/customers/page?page_no=0&page_size=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["code"], "200");
    assert_eq!(page["data"].as_array().unwrap().len(), 2);

    let (_, past_end) = send_json(&app, Method::GET, "/customers/page?page_no=5&page_size=2", None).await;
    assert_eq!(past_end["code"], "200");
    assert_eq!(past_end["data"], json!([]));

    let (_, sorted_page) =
        send_json(&app, Method::GET, "/customers/page?page_no=0&page_size=2&sort_by=name", None).await;
    let names: Vec<_> = sorted_page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Apple", "Banana"]);

    let (_, sorted_all) = send_json(&app, Method::GET, "/customers/sort?sort_by=name", None).await;
    let names: Vec<_> = sorted_all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Apple", "Banana", "Cherry"]);
}

#[tokio::test]
async fn unknown_sort_field_is_a_transport_error_not_an_envelope() {
    let app = app();
    send_json(&app, Method::POST, "/customers", Some(alice())).await;

    let (status, body) = send_json(&app, Method::GET, "/customers/sort?sort_by=customerName", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Sort Failed");
}
