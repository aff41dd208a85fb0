//! EventKind - Which variant a webhook notification carries

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Incident,
    Maintenance,
    Component,
    ComponentUpdate,
    /// No variant present in the payload
    Unknown,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Incident => write!(f, "incident"),
            EventKind::Maintenance => write!(f, "maintenance"),
            EventKind::Component => write!(f, "component"),
            EventKind::ComponentUpdate => write!(f, "component_update"),
            EventKind::Unknown => write!(f, "unknown"),
        }
    }
}
