use serde::Serialize;
use uuid::Uuid;

use crate::message::Transcript;

/// Compact prompt bar vs. full-screen transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ViewMode {
    #[default]
    Collapsed,
    Expanded,
}

/// Whether an answer is outstanding (drives the typing indicator)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Pending {
    #[default]
    Idle,
    Awaiting,
}

/// State of one session activation.
/// Owned by exactly one controller, which hands out `&SessionState` snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    session_id: Uuid,
    transcript: Transcript,
    draft: String,
    pending: Pending,
    view_mode: ViewMode,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            transcript: Transcript::new(),
            draft: String::new(),
            pending: Pending::Idle,
            view_mode: ViewMode::Collapsed,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn pending(&self) -> Pending {
        self.pending
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_pending(&self) -> bool {
        self.pending == Pending::Awaiting
    }

    pub fn is_expanded(&self) -> bool {
        self.view_mode == ViewMode::Expanded
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn set_pending(&mut self, pending: Pending) {
        self.pending = pending;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
