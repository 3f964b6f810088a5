//! HTTP-level tests for the `/classes` listing endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_rate_limit, get};

#[tokio::test]
async fn test_list_classes_without_filters_returns_all() {
    let app = build_test_app();
    let response = get(app, "/classes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 5);

    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["name"], "Guitar Basics");
    assert_eq!(data[0]["instructorName"], "Priya S.");
    assert_eq!(data[0]["spotsAvailable"], 5);
}

#[tokio::test]
async fn test_instrument_filter_is_case_insensitive() {
    let app = build_test_app();
    let response = get(app, "/classes?instrument=guitar").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    let data = json["data"].as_array().unwrap();
    assert!(data.iter().all(|c| c["instrument"] == "Guitar"));
}

#[tokio::test]
async fn test_level_and_instructor_filters() {
    let app = build_test_app();

    let response = get(app.clone(), "/classes?level=beginner").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 3);

    let response = get(app, "/classes?instructor=priya").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn test_empty_query_parameters_mean_no_restriction() {
    let app = build_test_app();
    let response = get(app, "/classes?instrument=&level=&instructor=").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 5);
}

#[tokio::test]
async fn test_unmatched_filter_returns_empty_list_not_error() {
    let app = build_test_app();
    let response = get(app, "/classes?instrument=Harp").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_listing_requires_no_authentication() {
    let app = build_test_app();
    let response = get(app, "/classes").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = build_test_app();
    let response = get(app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rate_limit_returns_429_once_exhausted() {
    let app = build_test_app_with_rate_limit(5);

    for _ in 0..5 {
        let response = get(app.clone(), "/classes").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app, "/classes").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
