use crate::error::RequestFailure;

/// Identifies one submit → answer round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExchangeId(pub u64);

/// Outcome of an exchange, posted by the request task once it settles.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub exchange: ExchangeId,
    pub outcome: Result<String, RequestFailure>,
}

impl Settlement {
    pub fn answered(exchange: ExchangeId, text: impl Into<String>) -> Self {
        Self {
            exchange,
            outcome: Ok(text.into()),
        }
    }

    pub fn failed(exchange: ExchangeId, failure: RequestFailure) -> Self {
        Self {
            exchange,
            outcome: Err(failure),
        }
    }
}
