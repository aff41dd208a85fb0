//! Application Layer (Use Cases)
//!
//! Orchestrates formatting and delivery of inbound notifications.

mod relay_service;

pub use relay_service::{DeliveryOutcome, RelayService};
