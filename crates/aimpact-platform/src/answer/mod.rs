pub mod http;
pub mod unconfigured;

pub use http::{HttpAnswerClient, AskRequest, check_status, parse_answer};
pub use unconfigured::UnconfiguredAnswers;

use std::rc::Rc;
use aimpact_core::ports::AnswerPort;
use aimpact_types::config::AppConfig;

/// Pick the answering adapter for this build.
/// Falls back to `UnconfiguredAnswers` so every submission still settles.
pub fn answers_from_config(config: &AppConfig) -> Rc<dyn AnswerPort> {
    match config.endpoint() {
        Ok(url) => {
            log::info!("Answering service: {}", url);
            Rc::new(HttpAnswerClient::new(url))
        }
        Err(e) => {
            log::error!("{}. Every request will fall back.", e);
            Rc::new(UnconfiguredAnswers)
        }
    }
}
