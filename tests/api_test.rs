// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP API surface tests driven through the router without a socket.

use aphelion_assess::api::{create_router, ApiState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> axum::Router {
    create_router(Arc::new(ApiState::new()))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn frameworks_endpoint_lists_all_eight() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/frameworks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let frameworks = json.as_array().unwrap();
    assert_eq!(frameworks.len(), 8);
    assert!(frameworks.iter().any(|f| f["id"] == "nist_csf"));
    assert!(frameworks.iter().any(|f| f["id"] == "hipaa"));
}

#[tokio::test]
async fn controls_endpoint_returns_sorted_union() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/controls?frameworks=nist_csf,iso_27001")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let controls = json["controls"].as_array().unwrap();
    assert_eq!(controls.len(), 29);

    // Patch Management is in both frameworks
    let shared = &json["controlFrameworks"]["Patch Management"];
    assert_eq!(shared.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn controls_endpoint_skips_unknown_ids() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/controls?frameworks=soc2,nist_csf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["controls"].as_array().unwrap().len(), 15);
}

#[tokio::test]
async fn assess_rejects_incomplete_selections() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assess")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"selectedFrameworks":["nist_csf"]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"], "No assessment data available");
}

#[tokio::test]
async fn assess_returns_the_analytics_snapshot() {
    let payload = r#"{
        "selectedFrameworks": ["nist_csf"],
        "selectedControls": ["Asset Inventory", "Encryption"]
    }"#;
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assess")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["controlsImplemented"], 2);
    assert_eq!(json["totalControls"], 15);
    assert_eq!(json["frameworkCompliance"]["NIST CSF"], 13.33);
    assert!(json["securityScore"].as_u64().unwrap() <= 100);
    assert!(json["recommendations"].as_array().unwrap().len() <= 6);
}

#[tokio::test]
async fn report_endpoint_wraps_html_in_a_download_envelope() {
    let payload = r#"{
        "selectedFrameworks": ["nist_csf"],
        "selectedControls": ["Asset Inventory"],
        "format": "html"
    }"#;
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert!(json["htmlContent"]
        .as_str()
        .unwrap()
        .starts_with("<!DOCTYPE html>"));
    assert!(json["filename"]
        .as_str()
        .unwrap()
        .ends_with(".html"));
    assert!(json["downloadTime"].is_string());
}

#[tokio::test]
async fn report_endpoint_streams_markdown_as_attachment() {
    let payload = r#"{
        "selectedFrameworks": ["hipaa"],
        "selectedControls": ["Access Control"],
        "format": "markdown"
    }"#;
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "text/markdown"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"cybersecurity_assessment_report_"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let md = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(md.contains("## Executive Summary"));
}

#[tokio::test]
async fn report_endpoint_rejects_incomplete_selections() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"selectedControls":["Encryption"]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No assessment data available");
}
