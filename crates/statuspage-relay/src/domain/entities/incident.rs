//! Incident - An unplanned disruption reported on the page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Component;

/// Incident as delivered in an `incident` webhook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    pub id: String,
    pub name: String,
    /// `investigating`, `identified`, `monitoring`, `resolved`, ...
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub monitoring_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    /// `none`, `minor`, `major` or `critical`
    pub impact: String,
    pub shortlink: String,
    pub started_at: Option<DateTime<Utc>>,
    pub page_id: String,
    /// Status updates, newest first as Statuspage orders them
    pub incident_updates: Option<Vec<IncidentUpdate>>,
    pub components: Option<Vec<Component>>,
    pub body: Option<String>,

    // Postmortem
    pub postmortem_ignored: Option<bool>,
    pub postmortem_body: Option<String>,
    pub postmortem_body_last_updated_at: Option<DateTime<Utc>>,
    pub postmortem_published_at: Option<DateTime<Utc>>,
    pub postmortem_notified_subscribers: Option<bool>,
    pub postmortem_notified_twitter: Option<bool>,
    pub backfilled: Option<bool>,

    // Scheduling (incidents created from a maintenance window)
    pub scheduled_for: Option<DateTime<Utc>>,
    pub scheduled_until: Option<DateTime<Utc>>,
    pub scheduled_remind_prior: Option<bool>,
    pub scheduled_reminded_at: Option<DateTime<Utc>>,
    pub impact_override: Option<String>,
    pub scheduled_auto_in_progress: Option<bool>,
    pub scheduled_auto_completed: Option<bool>,
}

/// One entry in an incident's update timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncidentUpdate {
    pub id: String,
    pub status: String,
    pub body: String,
    pub incident_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub display_at: DateTime<Utc>,
    pub affected_components: Option<Vec<Component>>,
    pub deliver_notifications: Option<bool>,
    pub custom_tweet: Option<String>,
    pub tweet_id: Option<String>,
}

impl Incident {
    /// Names of the affected components, in payload order
    pub fn component_names(&self) -> Vec<&str> {
        self.components
            .iter()
            .flatten()
            .map(|c| c.name.as_str())
            .collect()
    }
}
