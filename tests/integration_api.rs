//! API Integration Tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use uuid::Uuid;

mod common;

async fn read_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = common::test_app();

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_insights_synthetic_e2e() {
    let app = common::test_app();
    let snapshot = serde_json::to_value(common::scenario_snapshot()).unwrap();

    let response = app
        .oneshot(post_json("/api/v1/insights", &snapshot))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["mode"], "synthetic");
    assert_eq!(json["predictedNextMonthUsers"], 111);
    assert_eq!(json["predictedNextMonthBookings"], 74);
    assert_eq!(json["predictedNextMonthHostels"], 5);
    assert_eq!(json["userGrowth"]["growthRate"], 11.11);
    assert_eq!(json["userGrowth"]["currentValue"], 100.0);
    assert_eq!(json["bookingGrowth"]["trend"].as_array().unwrap().len(), 5);
    assert!(json["hostelExpansion"].get("trend").is_none());
}

#[tokio::test]
async fn test_insights_historical_e2e() {
    let app = common::test_app();
    let body = json!({
        "totalUsers": 100,
        "newUsersThisMonth": 10,
        "totalBookings": 60,
        "activeHostelsCount": 5,
        "historicalData": [
            {"month": "Apr", "users": 100, "bookings": 55, "hostels": 5},
            {"month": "Mar", "users": 90, "bookings": 50, "hostels": 4}
        ]
    });

    let response = app
        .oneshot(post_json("/api/v1/insights", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["mode"], "historical");
    assert_eq!(json["userGrowth"]["growthRate"], 11.11);
    assert_eq!(json["bookingGrowth"]["growthRate"], 10.0);
    assert_eq!(json["predictedNextMonthBookings"], 66);
    assert_eq!(json["hostelExpansion"]["growthRate"], 25.0);
    assert_eq!(json["predictedNextMonthHostels"], 6);

    let trend = json["hostelExpansion"]["trend"].as_array().unwrap();
    assert_eq!(trend[0], json!({"month": "Mar", "value": 4.0}));
    assert_eq!(trend[1], json!({"month": "Apr", "value": 5.0}));
}

#[tokio::test]
async fn test_growth_rates_endpoint() {
    let app = common::test_app();
    let snapshot = serde_json::to_value(common::scenario_snapshot()).unwrap();

    let response = app
        .oneshot(post_json("/api/v1/insights/growth-rates", &snapshot))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["mode"], "synthetic");
    common::assert_close(json["users"].as_f64().unwrap(), 0.1111);
    common::assert_close(json["bookings"].as_f64().unwrap(), 0.24);
    common::assert_close(json["hostels"].as_f64().unwrap(), 0.04);
}

#[tokio::test]
async fn test_empty_snapshot_is_accepted() {
    let app = common::test_app();

    let response = app
        .oneshot(post_json("/api/v1/insights", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["predictedNextMonthUsers"], 0);
    assert_eq!(json["predictedNextMonthBookings"], 0);
    assert_eq!(json["predictedNextMonthHostels"], 0);
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = common::test_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/insights")
        .header("content-type", "application/json")
        .body(Body::from("{\"totalUsers\": "))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = read_json(response).await;
    assert_eq!(json["error_code"], "invalid_request");
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let app = common::test_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/insights")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let json = read_json(response).await;
    assert_eq!(json["error_code"], "unsupported_media_type");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = common::test_app();
    let request_id = Uuid::new_v4().to_string();

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/insights")
        .header("content-type", "application/json")
        .header("x-request-id", &request_id)
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-request-id").unwrap().to_str().unwrap(),
        request_id
    );
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let app = common::test_app();

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    let header = response.headers().get("x-request-id").unwrap();
    assert!(Uuid::parse_str(header.to_str().unwrap()).is_ok());
}
