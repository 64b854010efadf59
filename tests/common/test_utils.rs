use super::mocks::{MockLlmClient, RecordedCall};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use doc_extractor::{
    extraction::{Extractor, ExtractorSettings},
    server,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "sk-or-test-key";

pub const SAMPLE_INVOICE_JSON: &str = r#"{"expertName":"A","expertLink":"https://topmate.io/a","billedName":"Bob","billedEmail":"bob@example.com","billedPhone":"+1 555 0100","itemName":"1:1 Mentorship","amount":2500,"discount":10,"date":"2025-03-14"}"#;

pub const SAMPLE_CERTIFICATE_JSON: &str = r#"{"recipientName":"Jane Doe","courseName":"Rust for Backend Engineers","cohortName":"February 2026 Cohort","certificateType":"cohort","creatorName":"Igor","creatorProfileUrl":"https://topmate.io/igor","completionDate":"2026-02-28","issueDate":"2026-03-01","duration":"8 weeks","signatureTitle":"Course Instructor"}"#;

/// Settings matching the shipped defaults, with a key present.
pub fn create_test_settings() -> ExtractorSettings {
    ExtractorSettings {
        model: "google/gemini-2.5-flash".to_string(),
        temperature: 0.1,
        api_key: Some(TEST_API_KEY.to_string()),
    }
}

pub fn create_test_extractor(
    mock: MockLlmClient,
    settings: ExtractorSettings,
) -> (Extractor, Arc<Mutex<Vec<RecordedCall>>>) {
    let calls = mock.call_log();
    (Extractor::new(Arc::new(mock), settings), calls)
}

pub fn create_test_app(
    mock: MockLlmClient,
    settings: ExtractorSettings,
) -> (Router, Arc<Mutex<Vec<RecordedCall>>>) {
    let (extractor, calls) = create_test_extractor(mock, settings);
    (server::router(Arc::new(extractor)), calls)
}

pub fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(server::GENERATE_PATH)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn read_body(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
