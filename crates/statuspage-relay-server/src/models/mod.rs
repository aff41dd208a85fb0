//! API Data Models
//!
//! - Webhook: Acknowledgement for received Statuspage notifications
//! - Service: Health and service description responses
//! - Error: JSON error body

mod error;
mod service;
mod webhook;

pub use error::*;
pub use service::*;
pub use webhook::*;
