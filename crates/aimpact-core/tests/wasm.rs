//! WASM-target tests for aimpact-core.
//!
//! Drives the controller under wasm32-unknown-unknown via
//! `wasm-pack test --node`, with a stub answering service.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use aimpact_core::ports::AnswerPort;
use aimpact_core::{SessionController, FALLBACK_REPLY};
use aimpact_types::message::{Origin, Query};
use aimpact_types::session::{Pending, ViewMode};
use aimpact_types::suggestion::SuggestionCatalog;
use aimpact_types::RequestFailure;

use std::rc::Rc;
use async_trait::async_trait;
use futures::executor::LocalPool;

struct EchoAnswers;

#[async_trait(?Send)]
impl AnswerPort for EchoAnswers {
    async fn ask(&self, query: &Query) -> aimpact_types::Result<String> {
        Ok(format!("echo: {}", query))
    }

    fn backend_name(&self) -> &str {
        "echo"
    }
}

struct DownAnswers;

#[async_trait(?Send)]
impl AnswerPort for DownAnswers {
    async fn ask(&self, _query: &Query) -> aimpact_types::Result<String> {
        Err(RequestFailure::Status { status: 502, body: String::new() })
    }

    fn backend_name(&self) -> &str {
        "down"
    }
}

#[wasm_bindgen_test]
fn controller_success_round_trip() {
    let mut pool = LocalPool::new();
    let mut c = SessionController::new(
        SuggestionCatalog::builtin(),
        Rc::new(EchoAnswers),
        Rc::new(pool.spawner()),
    );

    c.submit("ping");
    assert_eq!(c.state().pending(), Pending::Awaiting);
    pool.run_until_stalled();
    c.apply_settlements();

    let last = c.state().transcript().last().unwrap();
    assert_eq!(last.origin(), Origin::Agent);
    assert_eq!(last.text(), "echo: ping");
    assert_eq!(c.state().view_mode(), ViewMode::Expanded);
    assert_eq!(c.state().pending(), Pending::Idle);
}

#[wasm_bindgen_test]
fn controller_failure_round_trip() {
    let mut pool = LocalPool::new();
    let mut c = SessionController::new(
        SuggestionCatalog::builtin(),
        Rc::new(DownAnswers),
        Rc::new(pool.spawner()),
    );

    c.pick_suggestion("seo");
    pool.run_until_stalled();
    c.apply_settlements();

    assert_eq!(c.state().transcript().len(), 2);
    assert_eq!(c.state().transcript().last().unwrap().text(), FALLBACK_REPLY);
}
