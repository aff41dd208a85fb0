//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod discord;

// Re-exports
pub use discord::DiscordWebhook;
