//! End-to-end tests for the smoke and sample drivers against a mock service

mod common;

use common::{client_for, predict_body, setup_test_logging, unused_base_url};
use factprobe::domain::errors::ServiceError;
use factprobe::services::claim_sets::{sample_claims, smoke_claims};
use factprobe::services::{NoopObserver, SampleRunner, SampleTimeouts, SmokeTestRunner};
use mockito::{Matcher, Server};

const PARIS: &str = "Paris is the capital of France and is known for the Eiffel Tower.";

#[tokio::test]
async fn test_smoke_all_claims_pass() {
    setup_test_logging();
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"degraded"}"#)
        .create_async()
        .await;
    let predict = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(predict_body(false, 77.0))
        .expect(4)
        .create_async()
        .await;

    let report = SmokeTestRunner::new(client_for(&server.url()))
        .run(&smoke_claims(), &mut NoopObserver)
        .await;

    predict.assert_async().await;
    assert!(report.health.healthy, "status-only probe ignores the body");
    assert_eq!(report.outcomes.len(), 4);
    assert!(report.all_passed);
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn test_smoke_continues_after_failed_claim() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("POST", "/predict")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "claim": "The vaccine is 95% effective against the virus."
        })))
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;
    server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(predict_body(true, 90.0))
        .create_async()
        .await;

    let claims = smoke_claims();
    let report = SmokeTestRunner::new(client_for(&server.url()))
        .run(&claims, &mut NoopObserver)
        .await;

    assert_eq!(report.outcomes.len(), claims.len());
    assert!(!report.all_passed);
    assert_eq!(report.exit_code(), 1);
    let failed: Vec<_> = report.outcomes.iter().filter(|o| !o.passed()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].claim, "The vaccine is 95% effective against the virus.");
}

#[tokio::test]
async fn test_smoke_empty_prediction_body_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let claims = vec!["The vaccine is 95% effective against the virus.".to_string()];
    let report = SmokeTestRunner::new(client_for(&server.url()))
        .run(&claims, &mut NoopObserver)
        .await;

    assert!(!report.all_passed);
    assert_eq!(report.exit_code(), 1);
    assert!(report.outcomes[0].verdict().is_none());
    assert!(matches!(
        report.outcomes[0].error(),
        Some(ServiceError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_sample_empty_prediction_body_uses_defaults() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy"}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let claims = vec!["The vaccine is 95% effective against the virus.".to_string()];
    let report = SampleRunner::new(client_for(&server.url()), SampleTimeouts::default())
        .run(&claims, &mut NoopObserver)
        .await;

    let verdict = report.outcomes[0].verdict().expect("lenient decode gives a verdict");
    assert!(!verdict.is_true);
    assert!(verdict.confidence.abs() < f64::EPSILON);
    assert_eq!(verdict.status, "unknown");
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn test_smoke_unhealthy_sends_no_claims() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(503)
        .create_async()
        .await;
    let predict = server
        .mock("POST", "/predict")
        .expect(0)
        .create_async()
        .await;

    let report = SmokeTestRunner::new(client_for(&server.url()))
        .run(&smoke_claims(), &mut NoopObserver)
        .await;

    predict.assert_async().await;
    assert!(!report.health.healthy);
    assert!(report.outcomes.is_empty());
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_smoke_against_closed_port() {
    let report = SmokeTestRunner::new(client_for(&unused_base_url()))
        .run(&smoke_claims(), &mut NoopObserver)
        .await;

    assert!(matches!(
        report.health.error,
        Some(ServiceError::Connection { .. })
    ));
    assert!(report.outcomes.is_empty());
}

#[tokio::test]
async fn test_sample_requires_healthy_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"loading"}"#)
        .create_async()
        .await;
    let predict = server
        .mock("POST", "/predict")
        .expect(0)
        .create_async()
        .await;

    let report = SampleRunner::new(client_for(&server.url()), SampleTimeouts::default())
        .run(&sample_claims(), &mut NoopObserver)
        .await;

    predict.assert_async().await;
    assert!(!report.health.healthy);
    assert!(report.summary.is_none());
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_sample_paris_claim_is_true_with_97_percent() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy"}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/predict")
        .match_body(Matcher::Json(serde_json::json!({ "claim": PARIS })))
        .with_status(200)
        .with_body(r#"{"isTrue": true, "confidence": 97}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(predict_body(false, 60.0))
        .create_async()
        .await;

    let claims = sample_claims();
    let report = SampleRunner::new(client_for(&server.url()), SampleTimeouts::default())
        .run(&claims, &mut NoopObserver)
        .await;

    assert_eq!(report.outcomes.len(), claims.len());
    let paris = report
        .outcomes
        .iter()
        .find(|o| o.claim == PARIS)
        .expect("Paris claim is part of the sample set");
    let verdict = paris.verdict().expect("Paris claim was verified");
    assert!(verdict.is_true);
    assert!((verdict.confidence - 97.0).abs() < f64::EPSILON);
    assert_eq!(verdict.status, "unknown");

    let summary = report.summary.as_ref().expect("healthy run has a summary");
    assert_eq!(summary.total, claims.len());
    assert_eq!(summary.true_count, 1);
    assert_eq!(summary.false_count, claims.len() - 1);
    assert!(report.all_succeeded());
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn test_sample_records_server_errors_and_continues() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy"}"#)
        .create_async()
        .await;
    let predict = server
        .mock("POST", "/predict")
        .with_status(502)
        .with_body("bad gateway")
        .expect(3)
        .create_async()
        .await;

    let claims = vec![
        "First claim here.".to_string(),
        "Second claim here.".to_string(),
        "Third claim here.".to_string(),
    ];
    let report = SampleRunner::new(client_for(&server.url()), SampleTimeouts::default())
        .run(&claims, &mut NoopObserver)
        .await;

    predict.assert_async().await;
    assert!(!report.aborted);
    assert_eq!(report.outcomes.len(), 3);
    let summary = report.summary.as_ref().expect("healthy run has a summary");
    assert_eq!(summary.total, 0);
    assert!(summary.average_confidence.is_none());
    assert_eq!(report.exit_code(), 1);
}
