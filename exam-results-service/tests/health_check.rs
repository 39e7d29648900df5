mod common;

use common::TestApp;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "Backend is operational");
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn health_check_does_not_call_sheets() {
    let app = TestApp::spawn().await;

    app.get("/health").await;

    assert!(app.sheets.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "req-42")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn cors_allows_any_origin_for_get() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("origin", "https://results.example.org")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn metrics_endpoint_exposes_lookup_counter() {
    let app = TestApp::spawn().await;
    app.mock_sheet(common::asha_sheet()).await;

    app.get("/api/exam-results?rollNumber=101").await;
    let response = app.get("/metrics").await;

    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("exam_results_lookups_total"));
    assert!(body.contains("http_requests_total"));
}
