//! Notification Formatter
//!
//! Turns a Statuspage [`Envelope`] into the Discord embed announcing it.
//! Everything here is pure: the same envelope always yields the same embed.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Component, Embed, EmbedField, EmbedFooter, Envelope, Incident, Maintenance, StatusEvent,
    WebhookMessage,
};
use crate::domain::value_objects::EmbedColor;

const INCIDENT_PLACEHOLDER: &str = "No description provided";
const MAINTENANCE_PLACEHOLDER: &str = "Scheduled maintenance";

/// Build the full webhook message for an envelope.
///
/// Returns `None` when the envelope carries nothing we announce
/// (a bare `component_update`, or no event at all).
pub fn build_message(envelope: &Envelope) -> Option<WebhookMessage> {
    build_embed(envelope).map(WebhookMessage::new)
}

/// Build the embed for the envelope's event, if it is a supported one.
pub fn build_embed(envelope: &Envelope) -> Option<Embed> {
    match envelope.event.as_ref()? {
        StatusEvent::Incident(incident) => Some(format_incident(incident, &envelope.page.id)),
        StatusEvent::Maintenance(maintenance) => {
            Some(format_maintenance(maintenance, &envelope.page.id))
        }
        StatusEvent::Component { component, .. } => Some(format_component(component)),
        StatusEvent::ComponentUpdate(_) => None,
    }
}

/// Public page URL for a Statuspage page id
pub fn page_url(page_id: &str) -> String {
    format!("https://{page_id}.statuspage.io")
}

/// `major_outage` -> `Major Outage`
///
/// Underscores become spaces; the first letter of every word is upper-cased
/// and the remaining letters lower-cased. Any non-letter starts a new word.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for c in value.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Body text, or the placeholder when the body is absent or empty
fn body_or(body: Option<&str>, placeholder: &str) -> String {
    body.filter(|b| !b.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

/// Shortlink, falling back to the page itself when Statuspage sent none
fn deep_link(shortlink: &str, page_id: &str) -> String {
    if shortlink.is_empty() {
        page_url(page_id)
    } else {
        shortlink.to_string()
    }
}

fn affected_components(names: Vec<&str>) -> Option<EmbedField> {
    if names.is_empty() {
        return None;
    }
    Some(EmbedField::block("Affected Components", names.join(", ")))
}

fn format_incident(incident: &Incident, page_id: &str) -> Embed {
    let started = incident
        .started_at
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "Unknown".to_string());

    let mut fields = vec![
        EmbedField::inline("Status", title_case(&incident.status)),
        EmbedField::inline("Impact", title_case(&incident.impact)),
        EmbedField::inline("Started", started),
    ];
    fields.extend(affected_components(incident.component_names()));
    if let Some(resolved_at) = &incident.resolved_at {
        fields.push(EmbedField::inline("Resolved", format_timestamp(resolved_at)));
    }

    Embed {
        title: format!("🚨 {}", incident.name),
        description: body_or(incident.body.as_deref(), INCIDENT_PLACEHOLDER),
        color: EmbedColor::for_status(&incident.status, Some(&incident.impact)),
        url: Some(deep_link(&incident.shortlink, page_id)),
        timestamp: incident.updated_at.to_rfc3339(),
        fields,
        footer: EmbedFooter::default(),
    }
}

fn format_maintenance(maintenance: &Maintenance, page_id: &str) -> Embed {
    let mut fields = vec![
        EmbedField::inline("Status", title_case(&maintenance.status)),
        EmbedField::inline(
            "Scheduled Start",
            format_timestamp(&maintenance.scheduled_for),
        ),
        EmbedField::inline(
            "Scheduled End",
            format_timestamp(&maintenance.scheduled_until),
        ),
    ];
    fields.extend(affected_components(maintenance.component_names()));

    Embed {
        title: format!("🔧 {}", maintenance.name),
        description: body_or(maintenance.body.as_deref(), MAINTENANCE_PLACEHOLDER),
        color: EmbedColor::for_status(&maintenance.status, None),
        url: Some(deep_link(&maintenance.shortlink, page_id)),
        timestamp: maintenance.updated_at.to_rfc3339(),
        fields,
        footer: EmbedFooter::default(),
    }
}

fn format_component(component: &Component) -> Embed {
    let status = title_case(&component.status);

    let mut fields = vec![
        EmbedField::inline("Component", component.name.clone()),
        EmbedField::inline("Status", status.clone()),
    ];
    if let Some(description) = component.description.as_deref().filter(|d| !d.is_empty()) {
        fields.push(EmbedField::block("Description", description));
    }

    Embed {
        title: "📊 Component Status Update".to_string(),
        description: format!(
            "**{}** status changed to **{}**",
            component.name, status
        ),
        color: EmbedColor::for_status(&component.status, None),
        url: None,
        timestamp: component.updated_at.to_rfc3339(),
        fields,
        footer: EmbedFooter::default(),
    }
}
