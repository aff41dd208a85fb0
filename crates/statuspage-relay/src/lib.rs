//! Statuspage Relay Domain Library
//!
//! Core domain types and interfaces for relaying Statuspage webhook
//! notifications to a Discord channel.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Inbound payload models (Envelope, Incident, Maintenance,
//!     Component) and the outbound notification (Embed)
//!   - `value_objects/`: Immutable value types (EmbedColor, EventKind)
//!   - `services/`: Pure domain services (notification formatter)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `notification`: Outbound delivery of formatted notifications
//!
//! # Usage
//!
//! ```rust,ignore
//! use statuspage_relay::{build_message, Envelope};
//!
//! let envelope = Envelope::from_slice(&body)?;
//! if let Some(message) = build_message(&envelope) {
//!     sink.send(&message).await?;
//! }
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_embed, build_message, page_url, title_case, Component, ComponentUpdate, DomainError,
    Embed, EmbedColor, EmbedField, EmbedFooter, Envelope, EventKind, Incident, IncidentUpdate,
    Maintenance, MaintenanceUpdate, Meta, Page, StatusEvent, WebhookMessage,
};
pub use ports::NotificationSink;
