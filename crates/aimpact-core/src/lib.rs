//! Conversational session core.
//!
//! Owns the transcript and view state, turns user intents into exchanges
//! with the answering service, and folds settled exchanges back into the
//! transcript. Platform code plugs in through [`ports::AnswerPort`] and a
//! `futures::task::LocalSpawn` executor.

pub mod controller;
pub mod event_bus;
pub mod ports;


pub use controller::{Intent, SessionController, FALLBACK_REPLY};
