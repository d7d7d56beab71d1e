use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use jobboard_backend::{routes, services::storage::MemoryStorage, AppState};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn setup_app() -> Router {
    let state = AppState::with_storage(Arc::new(MemoryStorage::new()));
    routes::api_router().with_state(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ids(body: &JsonValue) -> Vec<i64> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn list_without_criteria_returns_seed_in_order() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/api/vacancies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5]);
    assert_eq!(body["items"][0]["workType"], "Полная занятость");
    assert_eq!(body["items"][0]["createdAt"], "2025-03-15");
    assert_eq!(body["items"][0]["employerId"], 2);
}

#[tokio::test]
async fn list_filters_by_category_and_search() {
    let app = setup_app();
    let (_, sales) = get_json(&app, "/api/vacancies?category=%D0%9F%D1%80%D0%BE%D0%B4%D0%B0%D0%B6%D0%B8").await;
    assert_eq!(ids(&sales), vec![3]);

    let (_, remote) = get_json(&app, "/api/vacancies?search=devops&workType=%D0%A3%D0%B4%D0%B0%D0%BB%D0%B5%D0%BD%D0%BD%D0%B0%D1%8F%20%D1%80%D0%B0%D0%B1%D0%BE%D1%82%D0%B0").await;
    assert_eq!(ids(&remote), vec![5]);

    let (_, none) = get_json(&app, "/api/vacancies?search=kotlin").await;
    assert_eq!(none["total"], 0);
}

#[tokio::test]
async fn list_ignores_empty_query_values_and_sorts() {
    let app = setup_app();
    let (_, body) = get_json(&app, "/api/vacancies?search=&category=&location=&sort=oldest").await;
    assert_eq!(ids(&body), vec![5, 4, 3, 2, 1]);

    let (status, body) = get_json(&app, "/api/vacancies?workType=&sort=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn filter_options_are_distinct() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/api/vacancies/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["workTypes"],
        json!(["Полная занятость", "Удаленная работа"])
    );
}

#[tokio::test]
async fn get_by_id_and_missing() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/api/vacancies/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Java-разработчик");

    let (status, body) = get_json(&app, "/api/vacancies/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_appends_with_next_id_and_today() {
    let app = setup_app();
    let payload = json!({
        "title": "Rust-разработчик",
        "company": "ООО \"Технологии\"",
        "location": "Москва",
        "salary": "200 000 - 260 000 ₽",
        "description": "Разработка сервисов на Rust",
        "requirements": ["Rust", "Tokio"],
        "employerId": 2,
        "category": "IT, интернет, связь",
        "workType": "Полная занятость"
    });
    let req = Request::builder()
        .method("POST")
        .uri("/api/vacancies")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let created: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created["id"], 6);
    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(created["createdAt"], today);

    let (_, list) = get_json(&app, "/api/vacancies").await;
    assert_eq!(ids(&list), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn create_rejects_blank_title() {
    let app = setup_app();
    let payload = json!({
        "title": "  ",
        "company": "АО \"Финтех\"",
        "location": "Москва",
        "employerId": 3,
        "category": "IT, интернет, связь",
        "workType": "Полная занятость"
    });
    let req = Request::builder()
        .method("POST")
        .uri("/api/vacancies")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/api/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/vacancies"].is_object());
    assert!(body["paths"]["/api/auth/login"].is_object());
}
