//! Envelope - The full inbound webhook body
//!
//! Statuspage sends one JSON object per notification carrying the page plus
//! one of `incident`, `maintenance`, `component` or `component_update`.
//! The wire shape models these as independent optional keys; here they are
//! collapsed into [`StatusEvent`] so two unrelated variants can never be set
//! at the same time.

use serde::Deserialize;

use super::{Component, ComponentUpdate, Incident, Maintenance, Meta, Page};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::EventKind;

/// Inbound webhook notification
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawEnvelope")]
pub struct Envelope {
    pub meta: Option<Meta>,
    pub page: Page,
    /// `None` when the payload carries no variant at all
    pub event: Option<StatusEvent>,
}

/// The single event a notification is about
#[derive(Debug, Clone, PartialEq)]
pub enum StatusEvent {
    Incident(Incident),
    Maintenance(Maintenance),
    /// Component status change, usually accompanied by its update record
    Component {
        component: Component,
        update: Option<ComponentUpdate>,
    },
    /// Update record without the component it belongs to
    ComponentUpdate(ComponentUpdate),
}

/// Wire shape of the webhook body
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    meta: Option<Meta>,
    page: Page,
    incident: Option<Incident>,
    maintenance: Option<Maintenance>,
    component: Option<Component>,
    component_update: Option<ComponentUpdate>,
}

impl TryFrom<RawEnvelope> for Envelope {
    type Error = String;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        let event = match (
            raw.incident,
            raw.maintenance,
            raw.component,
            raw.component_update,
        ) {
            (None, None, None, None) => None,
            (Some(incident), None, None, None) => Some(StatusEvent::Incident(incident)),
            (None, Some(maintenance), None, None) => Some(StatusEvent::Maintenance(maintenance)),
            (None, None, Some(component), update) => {
                Some(StatusEvent::Component { component, update })
            }
            (None, None, None, Some(update)) => Some(StatusEvent::ComponentUpdate(update)),
            (incident, maintenance, component, update) => {
                let present: Vec<&str> = [
                    incident.is_some().then_some("incident"),
                    maintenance.is_some().then_some("maintenance"),
                    component.is_some().then_some("component"),
                    update.is_some().then_some("component_update"),
                ]
                .into_iter()
                .flatten()
                .collect();

                return Err(format!(
                    "expected at most one event, got {}",
                    present.join(", ")
                ));
            }
        };

        Ok(Self {
            meta: raw.meta,
            page: raw.page,
            event,
        })
    }
}

impl Envelope {
    /// Decode a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self, DomainError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Which variant this notification carries
    pub fn kind(&self) -> EventKind {
        self.event
            .as_ref()
            .map(StatusEvent::kind)
            .unwrap_or(EventKind::Unknown)
    }

    /// Short label used in logs and in the acknowledgement body,
    /// e.g. `incident (investigating)`
    pub fn describe(&self) -> String {
        match &self.event {
            Some(event) => format!("{} ({})", event.kind(), event.status()),
            None => EventKind::Unknown.to_string(),
        }
    }
}

impl StatusEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Incident(_) => EventKind::Incident,
            Self::Maintenance(_) => EventKind::Maintenance,
            Self::Component { .. } => EventKind::Component,
            Self::ComponentUpdate(_) => EventKind::ComponentUpdate,
        }
    }

    pub fn status(&self) -> &str {
        match self {
            Self::Incident(incident) => &incident.status,
            Self::Maintenance(maintenance) => &maintenance.status,
            Self::Component { component, .. } => &component.status,
            Self::ComponentUpdate(update) => &update.status,
        }
    }
}
