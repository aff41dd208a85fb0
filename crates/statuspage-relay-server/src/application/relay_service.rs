//! Relay Application Service (Use Case)
//!
//! Formats an inbound envelope and hands the result to the notification
//! sink. Delivery runs in its own task so the HTTP response never waits on
//! Discord.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use statuspage_relay::{build_message, DomainError, Envelope, NotificationSink};

/// How a delivery attempt ended
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// The sink accepted the message
    Delivered,
    /// Nothing to announce for this envelope
    Skipped,
    /// The sink failed; already logged
    Failed(DomainError),
}

/// Application service for relaying notifications
pub struct RelayService {
    sink: Arc<dyn NotificationSink>,
}

impl RelayService {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    /// Start delivery in a detached task.
    ///
    /// The returned handle resolves once the attempt has finished; callers
    /// that do not care may drop it without cancelling the task.
    pub fn dispatch(self: &Arc<Self>, envelope: Envelope) -> JoinHandle<DeliveryOutcome> {
        let delivery_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "delivery",
            %delivery_id,
            page_id = %envelope.page.id,
            kind = %envelope.kind(),
        );
        let service = Arc::clone(self);

        tokio::spawn(async move { service.deliver(&envelope).await }.instrument(span))
    }

    /// Format and send one envelope; failures are logged, never returned
    pub async fn deliver(&self, envelope: &Envelope) -> DeliveryOutcome {
        let Some(message) = build_message(envelope) else {
            tracing::warn!("No supported webhook type found, nothing sent");
            return DeliveryOutcome::Skipped;
        };

        match self.sink.send(&message).await {
            Ok(()) => {
                tracing::info!(
                    sink = self.sink.name(),
                    "Successfully sent notification for {}",
                    envelope.describe()
                );
                DeliveryOutcome::Delivered
            }
            Err(e) => {
                tracing::error!(sink = self.sink.name(), error = %e, "Failed to send notification");
                DeliveryOutcome::Failed(e)
            }
        }
    }
}
