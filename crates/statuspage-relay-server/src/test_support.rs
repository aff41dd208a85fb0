//! Shared test fixtures: sinks, payload builders, router state

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::to_bytes, response::Response};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use statuspage_relay::{
    build_message, DomainError, Envelope, NotificationSink, WebhookMessage,
};

use crate::application::RelayService;
use crate::config::{Config, DELIVERY_TIMEOUT};
use crate::AppState;

/// `sha256=<hex>` signature as Statuspage would send it
pub fn sign_payload(secret: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

/// Sink that keeps every message it is given
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<WebhookMessage>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<WebhookMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Wait until at least `count` messages arrived
    pub async fn wait_for(&self, count: usize) -> Vec<WebhookMessage> {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let sent = self.messages();
                if sent.len() >= count {
                    return sent;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("timed out waiting for deliveries")
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send(&self, message: &WebhookMessage) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Sink that always fails
pub struct FailingSink;

#[async_trait]
impl NotificationSink for FailingSink {
    async fn send(&self, _message: &WebhookMessage) -> Result<(), DomainError> {
        Err(DomainError::delivery("Discord webhook returned 500: boom"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Sink that takes `delay` to accept each message
pub struct SlowSink {
    delay: Duration,
    started: AtomicUsize,
    completed: AtomicUsize,
}

impl SlowSink {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Wait until `count` deliveries are in flight or done
    pub async fn wait_for_started(&self, count: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.started() < count {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("timed out waiting for deliveries to start")
    }
}

#[async_trait]
impl NotificationSink for SlowSink {
    async fn send(&self, _message: &WebhookMessage) -> Result<(), DomainError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        "slow"
    }
}

fn page() -> serde_json::Value {
    json!({
        "id": "j2mfxwj97wnj",
        "status_indicator": "major",
        "status_description": "Partial System Outage"
    })
}

/// JSON body of an incident notification
pub fn incident_body(status: &str, impact: &str) -> String {
    json!({
        "meta": {
            "unsubscribe": "http://statustest.flyingkleinbrothers.com:5000/?unsubscribe=j0vqr9kl3513",
            "documentation": "http://doers.statuspage.io/customer-notifications/webhooks/"
        },
        "page": page(),
        "incident": {
            "id": "p31zjtct2jer",
            "name": "Database Connection Issues",
            "status": status,
            "created_at": "2024-01-15T10:30:00.000Z",
            "updated_at": "2024-01-15T10:35:00.000Z",
            "impact": impact,
            "shortlink": "http://stspg.io/p31zjtct2jer",
            "started_at": "2024-01-15T10:30:00.000Z",
            "page_id": "j2mfxwj97wnj",
            "body": "We are investigating elevated error rates.",
            "components": [{
                "id": "8kbf7d35c070",
                "name": "API",
                "status": "major_outage",
                "created_at": "2024-01-15T10:30:00Z",
                "updated_at": "2024-01-15T10:35:00Z",
                "page_id": "j2mfxwj97wnj"
            }]
        }
    })
    .to_string()
}

pub fn incident_envelope(status: &str) -> Envelope {
    Envelope::from_slice(incident_body(status, "major").as_bytes()).unwrap()
}

pub fn component_update_envelope() -> Envelope {
    let body = json!({
        "page": page(),
        "component_update": {
            "id": "k7730b5v92bv",
            "status": "major_outage",
            "created_at": "2024-01-15T10:35:00Z",
            "updated_at": "2024-01-15T10:35:00Z"
        }
    });
    Envelope::from_slice(body.to_string().as_bytes()).unwrap()
}

/// Formatted message for an investigating incident
pub fn sample_message() -> WebhookMessage {
    build_message(&incident_envelope("investigating")).unwrap()
}

pub fn test_state(secret: Option<&str>, sink: Arc<dyn NotificationSink>) -> AppState {
    let config = Config {
        discord_webhook_url: "https://discord.com/api/webhooks/123/abc".to_string(),
        webhook_secret: secret.map(str::to_string),
        port: 8000,
        log_level: "info".to_string(),
        delivery_timeout: DELIVERY_TIMEOUT,
    };

    AppState {
        config: Arc::new(config),
        relay: Arc::new(RelayService::new(sink)),
    }
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
