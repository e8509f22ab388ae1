//! Browser platform adapters for the session core.

pub mod answer;
pub mod spawn;
