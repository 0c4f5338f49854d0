mod support;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use menucast::adapter::inbound::http::{create_router, ErrorResponse};
use menucast::application::context::ServiceContext;
use menucast::domain::calendar::SpecialDates;
use menucast::testkit::boost::FixedBoost;
use menucast::testkit::fixture;
use menucast::testkit::model::FailingRegressor;
use serde_json::Value;
use support::Workspace;
use tower::util::ServiceExt;

fn app() -> Router {
    create_router(Workspace::new().context())
}

async fn post_predict(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn predict_returns_quantity_per_item() {
    let (status, body) = post_predict(app(), r#"{"date": "2024-12-24"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let object = body.as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Dal Makhani", "Paneer Tikka", "Veg Pulao"]);
    assert_eq!(object["Dal Makhani"], 24);
    assert!(object.values().all(Value::is_i64));
}

#[tokio::test]
async fn missing_date_is_a_fixed_client_error() {
    let (status, body) = post_predict(app(), "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"error": "Missing date in request"}));
}

#[tokio::test]
async fn unparseable_date_reports_an_error_message() {
    let (status, body) = post_predict(app(), r#"{"date": "not-a-date"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert!(!error.error.is_empty());
    assert!(error.error.contains("not-a-date"));
}

#[tokio::test]
async fn non_string_date_is_rejected() {
    let (status, body) = post_predict(app(), r#"{"date": 20241225}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("number"));
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let (status, body) = post_predict(app(), r#"{"date": "#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn missing_content_type_is_a_client_error() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .body(Body::from(r#"{"date": "2024-12-24"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inference_failures_surface_as_client_errors() {
    let context = ServiceContext::new(
        fixture::table(),
        Arc::new(FailingRegressor),
        SpecialDates::default(),
        Arc::new(FixedBoost(1.4)),
    );
    let (status, body) = post_predict(create_router(Arc::new(context)), r#"{"date": "2024-12-24"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid model artifact: model is unavailable");
}

#[tokio::test]
async fn special_date_is_boosted_over_http() {
    let context = fixture::context(Arc::new(FixedBoost(1.45)));
    let (status, body) = post_predict(create_router(Arc::new(context)), r#"{"date": "2024-12-25"}"#).await;

    assert_eq!(status, StatusCode::OK);
    // Wednesday: 20 + 2 + veg 5 + day_Wednesday 0.5 + Dal 2 = 29.5; * 1.45 = 42.775
    assert_eq!(body["Dal Makhani"], 43);
}

#[tokio::test]
async fn only_post_predict_is_routed() {
    let response = app()
        .oneshot(Request::builder().uri("/predict").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
