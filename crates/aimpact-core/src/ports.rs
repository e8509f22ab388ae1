//! Port traits — the hexagonal architecture boundary.
//!
//! Defined here in `aimpact-core` (pure Rust); implementations live in
//! `aimpact-platform`. The controller only ever sees these traits.

use async_trait::async_trait;
use aimpact_types::{message::Query, Result};

// ─── Answering Port ──────────────────────────────────────────

#[async_trait(?Send)]
pub trait AnswerPort {
    /// One request/response exchange with the answering service.
    ///
    /// Returns the answer text verbatim. Every transport problem (network,
    /// non-2xx status, unexpected body) comes back as a `RequestFailure`.
    /// Implementations make exactly one attempt and never cache.
    async fn ask(&self, query: &Query) -> Result<String>;

    /// Name of this adapter (for logging/debug)
    fn backend_name(&self) -> &str;
}
