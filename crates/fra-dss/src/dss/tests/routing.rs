use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::dss::dss_router;

fn router() -> Router {
    dss_router(Arc::new(engine()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn health_reports_service_name() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/dss/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Decision Support System");
}

#[tokio::test]
async fn individual_eligibility_returns_all_schemes() {
    let holder = serde_json::to_value(holder("H-1")).expect("holder json");

    let response = router()
        .oneshot(post_json("/api/dss/eligibility/individual", holder))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let results = body.as_array().expect("array of results");
    assert_eq!(results.len(), 6);
    assert_eq!(results[0]["scheme"], "PM_KISAN");
    assert_eq!(results[0]["status"], "ELIGIBLE");
}

#[tokio::test]
async fn out_of_range_holder_is_unprocessable() {
    let mut holder = holder("H-2");
    holder.age = 130;

    let response = router()
        .oneshot(post_json(
            "/api/dss/eligibility/individual",
            serde_json::to_value(holder).expect("holder json"),
        ))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("age"));
}

#[tokio::test]
async fn bulk_eligibility_applies_scheme_filter() {
    let request = json!({
        "fra_holders": [holder("H-1"), holder("H-2")],
        "schemes_filter": ["MGNREGA"],
    });

    let response = router()
        .oneshot(post_json("/api/dss/eligibility/bulk", request))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["H-1"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["H-2"][0]["scheme"], "MGNREGA");
}

#[tokio::test]
async fn village_interventions_rank_by_severity() {
    let village = serde_json::to_value(deprived_village("V-1")).expect("village json");

    let response = router()
        .oneshot(post_json("/api/dss/interventions/village", village))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body[0]["priority"], "CRITICAL");
    assert_eq!(body[0]["intervention_type"], "water_infrastructure");
}

#[tokio::test]
async fn empty_village_is_unprocessable() {
    let mut village = served_village("V-2");
    village.total_population = 0;

    let response = router()
        .oneshot(post_json(
            "/api/dss/interventions/bulk",
            json!({ "villages": [village], "priority_filter": "HIGH" }),
        ))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn policy_recommendations_serialize_phase_labels() {
    let request = json!({
        "villages": [deprived_village("V-1")],
        "fra_holders": [holder("H-1")],
    });

    let response = router()
        .oneshot(post_json("/api/dss/policy/recommendations", request))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["summary"]["total_villages_analyzed"], 1);
    assert_eq!(
        body["implementation_timeline"]["Phase 1 (0-6 months)"][0],
        "Village V-1: water_infrastructure"
    );
    assert!(body["priority_interventions"]["Jharkhand"].is_array());
}

#[tokio::test]
async fn scheme_info_lists_catalog() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/dss/schemes/info")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total_schemes"], 6);
    assert!(body["schemes"]["PM_KISAN"].is_object());
    assert!(body["last_updated"].is_string());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let response = router()
        .oneshot(post_json(
            "/api/dss/eligibility/individual",
            json!({ "holder_id": "H-9" }),
        ))
        .await
        .expect("router response");

    assert!(response.status().is_client_error());
}
