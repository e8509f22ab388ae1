//! Stand-in used when no endpoint was baked into the build.

use async_trait::async_trait;
use aimpact_core::ports::AnswerPort;
use aimpact_types::{message::Query, RequestFailure, Result};

pub struct UnconfiguredAnswers;

#[async_trait(?Send)]
impl AnswerPort for UnconfiguredAnswers {
    async fn ask(&self, _query: &Query) -> Result<String> {
        Err(RequestFailure::NotConfigured)
    }

    fn backend_name(&self) -> &str {
        "unconfigured"
    }
}
