use thiserror::Error;

/// Why an exchange with the answering service produced no answer.
/// Logged, never shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Answering service endpoint is not configured")]
    NotConfigured,

    #[error("Could not schedule request: {0}")]
    Spawn(String),
}

impl From<serde_json::Error> for RequestFailure {
    fn from(e: serde_json::Error) -> Self {
        RequestFailure::MalformedResponse(e.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Backend endpoint is missing (set AIMPACT_BACKEND_URL at build time)")]
    MissingEndpoint,

    #[error("Backend endpoint is neither an http(s) URL nor an absolute path: {0}")]
    InvalidEndpoint(String),
}
