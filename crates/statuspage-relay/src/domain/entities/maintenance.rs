//! Maintenance - A scheduled maintenance window

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Component;

/// Scheduled maintenance as delivered in a `maintenance` webhook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Maintenance {
    pub id: String,
    pub name: String,
    /// `scheduled`, `in_progress`, `verifying`, `completed`, ...
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub monitoring_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub shortlink: String,
    pub started_at: Option<DateTime<Utc>>,
    pub page_id: String,
    pub incident_updates: Option<Vec<MaintenanceUpdate>>,
    pub components: Option<Vec<Component>>,
    pub scheduled_for: DateTime<Utc>,
    pub scheduled_until: DateTime<Utc>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceUpdate {
    pub id: String,
    pub status: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub display_at: DateTime<Utc>,
    pub affected_components: Option<Vec<Component>>,
    pub deliver_notifications: Option<bool>,
    pub custom_tweet: Option<String>,
    pub tweet_id: Option<String>,
}

impl Maintenance {
    pub fn component_names(&self) -> Vec<&str> {
        self.components
            .iter()
            .flatten()
            .map(|c| c.name.as_str())
            .collect()
    }
}
