//! Domain Errors
//!
//! Error types shared by the payload model, the relay service and its
//! infrastructure adapters.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Required configuration is missing or invalid. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inbound webhook signature did not match the shared secret.
    #[error("Invalid signature")]
    Auth,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Outbound notification could not be delivered.
    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl DomainError {
    pub fn config<T: AsRef<str>>(message: T) -> Self {
        Self::Config(message.as_ref().to_string())
    }

    pub fn delivery<T: AsRef<str>>(message: T) -> Self {
        Self::Delivery(message.as_ref().to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}
