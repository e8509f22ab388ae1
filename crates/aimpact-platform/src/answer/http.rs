//! HTTP answering adapter.
//!
//! `POST {endpoint}` with `{"query": "..."}`; expects a 2xx JSON body with a
//! string `response` field. Uses browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use aimpact_core::ports::AnswerPort;
use aimpact_types::{message::Query, RequestFailure, Result};

pub struct HttpAnswerClient {
    endpoint: String,
}

impl HttpAnswerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl AnswerPort for HttpAnswerClient {
    async fn ask(&self, query: &Query) -> Result<String> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&AskRequest::new(query))
            .map_err(|e| RequestFailure::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestFailure::Network(e.to_string()))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            // An error status is reported even when its body is unreadable
            Err(_) if !response.ok() => String::new(),
            Err(e) => return Err(RequestFailure::Network(e.to_string())),
        };

        check_status(status, &body)?;
        parse_answer(&body)
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}

// ─── Wire types ──────────────────────────────────────────────

/// Request body sent to the answering service
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub query: &'a str,
}

impl<'a> AskRequest<'a> {
    pub fn new(query: &'a Query) -> Self {
        Self {
            query: query.as_str(),
        }
    }
}

#[derive(Deserialize)]
struct AskResponse {
    response: String,
}

/// Any status outside 2xx is a `Status` failure carrying the body for the logs.
pub fn check_status(status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RequestFailure::Status {
            status,
            body: body.to_string(),
        })
    }
}

/// Extract the answer from a success body.
/// A missing or non-string `response` is a `MalformedResponse`.
pub fn parse_answer(body: &str) -> Result<String> {
    let parsed: AskResponse = serde_json::from_str(body)?;
    Ok(parsed.response)
}
