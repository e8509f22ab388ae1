//! Settlement bus — carries finished exchanges back to the controller.
//!
//! Single-threaded (WASM constraint), interior mutability via RefCell.
//! Request tasks push settlements as they arrive; the controller drains
//! them once per frame, so drain order is settlement order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use aimpact_types::event::Settlement;

/// Shared settlement queue — clone-cheap via Rc.
#[derive(Clone, Default)]
pub struct SettlementBus {
    inner: Rc<RefCell<VecDeque<Settlement>>>,
}

impl SettlementBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a settlement. Called by request tasks.
    pub fn emit(&self, settlement: Settlement) {
        self.inner.borrow_mut().push_back(settlement);
    }

    /// Take every queued settlement in arrival order.
    pub fn drain(&self) -> Vec<Settlement> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}
