//! WASM-target tests for aimpact-types.
//!
//! Runs a subset of the native unit tests under wasm32-unknown-unknown
//! via `wasm-pack test --node`, mainly to exercise `Utc::now()` and
//! `Uuid::new_v4()` on the browser time/entropy sources.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use aimpact_types::message::*;
use aimpact_types::session::*;
use aimpact_types::suggestion::*;

#[wasm_bindgen_test]
fn message_user_has_timestamp() {
    let msg = Message::user(MessageId(1), "Hello");
    assert_eq!(msg.origin(), Origin::User);
    assert!(msg.created_at().timestamp() > 0);
}

#[wasm_bindgen_test]
fn session_initial_state() {
    let state = SessionState::new();
    assert!(state.transcript().is_empty());
    assert_eq!(state.view_mode(), ViewMode::Collapsed);
    assert_eq!(state.pending(), Pending::Idle);
}

#[wasm_bindgen_test]
fn session_ids_are_random() {
    assert_ne!(SessionState::new().session_id(), SessionState::new().session_id());
}

#[wasm_bindgen_test]
fn suggestion_prompt() {
    let catalog = SuggestionCatalog::builtin();
    assert_eq!(
        catalog.get("nurturing").unwrap().prompt(),
        "Help me with lead nurturing"
    );
}
