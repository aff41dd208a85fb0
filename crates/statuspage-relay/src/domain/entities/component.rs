//! Component - A monitored piece of the service and its status changes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a Statuspage component as received
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Component {
    pub id: String,
    pub name: String,
    /// Free-form status such as `operational` or `major_outage`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub page_id: String,
    pub position: Option<i64>,
    pub description: Option<String>,
    pub showcase: Option<bool>,
    pub start_date: Option<DateTime<Utc>>,
    pub group_id: Option<String>,
    pub group: Option<bool>,
    pub only_show_if_degraded: Option<bool>,
}

/// Minimal status-change record for a component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentUpdate {
    pub id: String,
    pub status: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
