//! Presentation layer. Panels read a `SessionState` and return the
//! `Intent`s the user produced this frame; they never mutate the session.

pub mod panels;
pub mod theme;
pub mod view;
