//! WASM-target tests for aimpact-platform (Node.js runtime).
//!
//! Covers the adapters that need no live answering service. Successful
//! requests against a real endpoint are exercised manually in the browser.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use aimpact_core::ports::AnswerPort;
use aimpact_platform::answer::{check_status, parse_answer, HttpAnswerClient, UnconfiguredAnswers};
use aimpact_types::message::Query;
use aimpact_types::RequestFailure;

#[wasm_bindgen_test]
fn parse_answer_success() {
    assert_eq!(parse_answer(r#"{"response":"42"}"#).unwrap(), "42");
}

#[wasm_bindgen_test]
fn parse_answer_missing_field() {
    assert!(parse_answer("{}").is_err());
}

#[wasm_bindgen_test]
async fn unconfigured_answers_fail() {
    let query = Query::new("hi").unwrap();
    let result = UnconfiguredAnswers.ask(&query).await;
    assert_eq!(result, Err(RequestFailure::NotConfigured));
}

#[wasm_bindgen_test]
fn check_status_maps_server_error() {
    assert!(matches!(
        check_status(502, "bad gateway"),
        Err(RequestFailure::Status { status: 502, .. })
    ));
}

#[wasm_bindgen_test]
async fn unreachable_endpoint_is_network_failure() {
    // Port 9 (discard) has nothing listening, so fetch itself rejects
    let client = HttpAnswerClient::new("http://127.0.0.1:9/query");
    let query = Query::new("hi").unwrap();
    let result = client.ask(&query).await;
    assert!(matches!(result, Err(RequestFailure::Network(_))), "{:?}", result);
}
