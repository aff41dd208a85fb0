//! EmbedColor - Severity palette for Discord embeds

use serde::{Serialize, Serializer};

/// Severity color of a notification
///
/// Serialized as the integer RGB value Discord expects in `embed.color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedColor {
    Green,
    Yellow,
    Red,
    Orange,
    Blue,
    Gray,
}

impl EmbedColor {
    pub const ALL: [EmbedColor; 6] = [
        EmbedColor::Green,
        EmbedColor::Yellow,
        EmbedColor::Red,
        EmbedColor::Orange,
        EmbedColor::Blue,
        EmbedColor::Gray,
    ];

    /// RGB value, e.g. `0xFF0000` for red
    pub fn rgb(self) -> u32 {
        match self {
            EmbedColor::Green => 0x00FF00,
            EmbedColor::Yellow => 0xFFFF00,
            EmbedColor::Red => 0xFF0000,
            EmbedColor::Orange => 0xFF8C00,
            EmbedColor::Blue => 0x0099FF,
            EmbedColor::Gray => 0x808080,
        }
    }

    /// Pick a color from a status string, using the incident impact as a
    /// secondary signal. Rules are checked in order; the first match wins.
    pub fn for_status(status: &str, impact: Option<&str>) -> Self {
        match (status, impact) {
            ("resolved" | "completed" | "operational", _) => EmbedColor::Green,
            ("investigating" | "identified" | "monitoring", _) => EmbedColor::Yellow,
            ("major_outage" | "partial_outage", _) | (_, Some("major")) => EmbedColor::Red,
            ("performance_issues" | "degraded_performance", _) | (_, Some("minor")) => {
                EmbedColor::Orange
            }
            ("scheduled" | "in_progress", _) => EmbedColor::Blue,
            _ => EmbedColor::Gray,
        }
    }
}

impl Serialize for EmbedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.rgb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_wins_over_impact() {
        assert_eq!(
            EmbedColor::for_status("resolved", Some("major")),
            EmbedColor::Green
        );
        assert_eq!(
            EmbedColor::for_status("operational", None),
            EmbedColor::Green
        );
    }

    #[test]
    fn test_active_incident_is_yellow() {
        for status in ["investigating", "identified", "monitoring"] {
            assert_eq!(
                EmbedColor::for_status(status, Some("critical")),
                EmbedColor::Yellow
            );
        }
    }

    #[test]
    fn test_outage_precedes_minor_impact() {
        assert_eq!(
            EmbedColor::for_status("major_outage", Some("minor")),
            EmbedColor::Red
        );
        assert_eq!(
            EmbedColor::for_status("partial_outage", None),
            EmbedColor::Red
        );
    }

    #[test]
    fn test_major_impact_precedes_degraded_status() {
        assert_eq!(
            EmbedColor::for_status("degraded_performance", Some("major")),
            EmbedColor::Red
        );
    }

    #[test]
    fn test_degraded_is_orange() {
        assert_eq!(
            EmbedColor::for_status("degraded_performance", None),
            EmbedColor::Orange
        );
        assert_eq!(
            EmbedColor::for_status("performance_issues", None),
            EmbedColor::Orange
        );
        assert_eq!(
            EmbedColor::for_status("postmortem", Some("minor")),
            EmbedColor::Orange
        );
    }

    #[test]
    fn test_minor_impact_precedes_scheduled() {
        assert_eq!(
            EmbedColor::for_status("scheduled", Some("minor")),
            EmbedColor::Orange
        );
        assert_eq!(EmbedColor::for_status("scheduled", None), EmbedColor::Blue);
        assert_eq!(
            EmbedColor::for_status("in_progress", Some("none")),
            EmbedColor::Blue
        );
    }

    #[test]
    fn test_unknown_status_is_gray() {
        assert_eq!(EmbedColor::for_status("verifying", None), EmbedColor::Gray);
        assert_eq!(
            EmbedColor::for_status("under_maintenance", Some("critical")),
            EmbedColor::Gray
        );
    }

    #[test]
    fn test_serializes_as_rgb_integer() {
        let value = serde_json::to_value(EmbedColor::Orange).unwrap();
        assert_eq!(value, serde_json::json!(0xFF8C00));
    }
}
