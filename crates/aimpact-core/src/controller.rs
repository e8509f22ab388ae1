//! Session controller — the only stateful component of the widget.
//!
//! Every accepted submission runs in two phases:
//! 1. Intent phase (synchronous): append the user message, clear the draft,
//!    expand the view, mark the session as awaiting, spawn the request task.
//! 2. Settlement phase: the request task posts its outcome on the
//!    [`SettlementBus`]; [`SessionController::apply_settlements`] appends the
//!    agent message (answer or fallback) and updates the pending flag.
//!
//! Overlapping submissions are not rejected. Their answers are appended in
//! the order they settle, not the order they were issued, and the first
//! settlement returns the session to idle.

use std::rc::Rc;

use futures::task::{LocalSpawn, LocalSpawnExt};

use aimpact_types::{
    RequestFailure,
    event::{ExchangeId, Settlement},
    message::{Message, MessageId, Query},
    session::{Pending, SessionState, ViewMode},
    suggestion::SuggestionCatalog,
};
use crate::event_bus::SettlementBus;
use crate::ports::AnswerPort;

/// Agent message appended when an exchange fails for any reason
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't get a response from the agent. Please try again later.";

/// What the presentation layer can ask the controller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Submit(String),
    /// Submit whatever is currently in the draft
    SubmitDraft,
    PickSuggestion(String),
    Back,
    UpdateDraft(String),
}

pub struct SessionController {
    state: SessionState,
    catalog: SuggestionCatalog,
    answers: Rc<dyn AnswerPort>,
    spawner: Rc<dyn LocalSpawn>,
    bus: SettlementBus,
    next_message_id: u64,
    next_exchange_id: u64,
    in_flight: usize,
}

impl SessionController {
    pub fn new(
        catalog: SuggestionCatalog,
        answers: Rc<dyn AnswerPort>,
        spawner: Rc<dyn LocalSpawn>,
    ) -> Self {
        let state = SessionState::new();
        log::info!(
            "Session {} activated (answers via {})",
            state.session_id(),
            answers.backend_name()
        );

        Self {
            state,
            catalog,
            answers,
            spawner,
            bus: SettlementBus::new(),
            next_message_id: 0,
            next_exchange_id: 0,
            in_flight: 0,
        }
    }

    /// Read-only view for rendering
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &SuggestionCatalog {
        &self.catalog
    }

    /// Exchanges spawned but not yet applied to the transcript.
    /// Diagnostic only; `pending` does not follow it.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// True when settlements are waiting for `apply_settlements`
    pub fn has_unapplied_settlements(&self) -> bool {
        self.bus.has_pending()
    }

    /// Route a presentation-layer intent. Returns the exchange it started, if any.
    pub fn dispatch(&mut self, intent: Intent) -> Option<ExchangeId> {
        match intent {
            Intent::Submit(text) => self.submit(&text),
            Intent::SubmitDraft => self.submit_draft(),
            Intent::PickSuggestion(id) => self.pick_suggestion(&id),
            Intent::Back => {
                self.back();
                None
            }
            Intent::UpdateDraft(text) => {
                self.update_draft(text);
                None
            }
        }
    }

    /// Submit `text` to the answering service.
    ///
    /// Blank text is ignored: nothing is appended and no request is made.
    pub fn submit(&mut self, text: &str) -> Option<ExchangeId> {
        let query = Query::new(text)?;

        let id = self.alloc_message_id();
        self.state
            .transcript_mut()
            .append(Message::user(id, query.as_str()));
        self.state.set_draft(String::new());
        self.state.set_view_mode(ViewMode::Expanded);
        self.in_flight += 1;
        self.state.set_pending(Pending::Awaiting);

        let exchange = self.alloc_exchange_id();
        log::debug!("Exchange {} issued: {:?}", exchange.0, query.as_str());
        self.spawn_exchange(exchange, query);
        Some(exchange)
    }

    pub fn submit_draft(&mut self) -> Option<ExchangeId> {
        let draft = self.state.draft().to_string();
        self.submit(&draft)
    }

    /// Submit the prompt derived from a catalog entry. Unknown ids are ignored.
    pub fn pick_suggestion(&mut self, suggestion_id: &str) -> Option<ExchangeId> {
        let Some(prompt) = self.catalog.get(suggestion_id).map(|s| s.prompt()) else {
            log::debug!("Ignoring unknown suggestion {:?}", suggestion_id);
            return None;
        };
        self.submit(&prompt)
    }

    /// Return to the collapsed prompt bar. Transcript, draft and pending are kept.
    pub fn back(&mut self) {
        if self.state.view_mode() == ViewMode::Expanded {
            self.state.set_view_mode(ViewMode::Collapsed);
        }
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    /// Fold every settled exchange into the transcript, in settlement order.
    /// Returns how many were applied.
    pub fn apply_settlements(&mut self) -> usize {
        let settlements = self.bus.drain();
        let applied = settlements.len();
        for settlement in settlements {
            self.settle(settlement);
        }
        applied
    }

    fn settle(&mut self, settlement: Settlement) {
        let text = match settlement.outcome {
            Ok(answer) => {
                log::debug!("Exchange {} answered", settlement.exchange.0);
                answer
            }
            Err(failure) => {
                log::warn!("Exchange {} failed: {}", settlement.exchange.0, failure);
                FALLBACK_REPLY.to_string()
            }
        };

        let id = self.alloc_message_id();
        self.state.transcript_mut().append(Message::agent(id, text));

        // Any settlement clears the typing indicator, even with other
        // exchanges still outstanding.
        self.in_flight = self.in_flight.saturating_sub(1);
        self.state.set_pending(Pending::Idle);
    }

    fn spawn_exchange(&self, exchange: ExchangeId, query: Query) {
        let answers = self.answers.clone();
        let bus = self.bus.clone();

        let task = async move {
            let outcome = answers.ask(&query).await;
            bus.emit(Settlement { exchange, outcome });
        };

        // A task that never runs must still settle, or the session would
        // stay awaiting forever.
        if let Err(e) = self.spawner.spawn_local(task) {
            log::error!("Failed to spawn exchange {}: {}", exchange.0, e);
            self.bus.emit(Settlement::failed(
                exchange,
                RequestFailure::Spawn(e.to_string()),
            ));
        }
    }

    fn alloc_message_id(&mut self) -> MessageId {
        self.next_message_id += 1;
        MessageId(self.next_message_id)
    }

    fn alloc_exchange_id(&mut self) -> ExchangeId {
        self.next_exchange_id += 1;
        ExchangeId(self.next_exchange_id)
    }
}
