//! Notification Delivery Port
//!
//! Abstract interface for posting a formatted notification to the chat
//! destination.

use async_trait::async_trait;

use crate::domain::entities::WebhookMessage;
use crate::domain::errors::DomainError;

/// Outbound notification sink
///
/// Implementations perform exactly one delivery attempt per call; retrying
/// is left to the caller.
///
/// # Example
///
/// ```rust,ignore
/// use statuspage_relay::ports::NotificationSink;
///
/// struct DiscordWebhook { /* reqwest client */ }
///
/// #[async_trait]
/// impl NotificationSink for DiscordWebhook {
///     async fn send(&self, message: &WebhookMessage) -> Result<(), DomainError> {
///         // POST the message as JSON
///     }
/// }
/// ```
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver a message
    ///
    /// # Errors
    /// `DomainError::Delivery` on transport failure, timeout or a non-2xx
    /// response.
    async fn send(&self, message: &WebhookMessage) -> Result<(), DomainError>;

    /// Short name of the destination, used in logs
    fn name(&self) -> &str;
}
