pub mod message;
pub mod suggestion;
pub mod session;
pub mod event;
pub mod config;
pub mod error;


pub use error::{ConfigError, RequestFailure};
pub type Result<T> = std::result::Result<T, RequestFailure>;
