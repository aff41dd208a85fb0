//! Page - The Statuspage page that emitted a notification

use serde::{Deserialize, Serialize};

/// Owning page of every webhook notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    /// Rollup indicator, e.g. `none`, `minor`, `major`, `critical`
    pub status_indicator: String,
    /// Human readable rollup, e.g. `All Systems Operational`
    pub status_description: String,
}

/// Optional metadata block sent alongside the page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    pub unsubscribe: Option<String>,
    pub documentation: Option<String>,
}
