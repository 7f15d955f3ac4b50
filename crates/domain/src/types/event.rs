//! Calendar event payloads (what we send) and records (what the store returns).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{SOURCE_EMAIL_ANALYSIS, SOURCE_EMAIL_ANALYSIS_UPDATE};
use crate::utils::datetime::iso_millis;

/// Attendee entry on an outgoing event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttendee {
    /// Trimmed address; always contains `@`.
    pub email: String,
}

/// Event payload submitted to the external calendar store.
///
/// `start < end` holds for every payload built by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventPayload {
    /// Event title.
    pub summary: String,
    /// Case facts plus the provenance note.
    pub description: String,
    /// Free-text location, when extracted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start instant (UTC).
    #[serde(with = "iso_millis")]
    pub start: DateTime<Utc>,
    /// End instant (UTC), strictly after `start`.
    #[serde(with = "iso_millis")]
    pub end: DateTime<Utc>,
    /// Deduplicated invitees.
    #[serde(default)]
    pub attendees: Vec<EventAttendee>,
    /// Private extended properties used for later lookups.
    #[serde(default)]
    pub private_metadata: BTreeMap<String, String>,
}

impl CalendarEventPayload {
    /// Private metadata value for `key`.
    #[must_use]
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.private_metadata.get(key).map(String::as_str)
    }
}

/// Which write a payload is destined for; drives the metadata source tag and
/// the provenance wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    /// New event.
    Create,
    /// Full replacement of a known event.
    Update,
}

impl PayloadKind {
    /// Value written under the source metadata key.
    #[must_use]
    pub const fn source_tag(self) -> &'static str {
        match self {
            Self::Create => SOURCE_EMAIL_ANALYSIS,
            Self::Update => SOURCE_EMAIL_ANALYSIS_UPDATE,
        }
    }

    /// Leading verb of the provenance note in the description.
    #[must_use]
    pub const fn provenance_verb(self) -> &'static str {
        match self {
            Self::Create => "Created",
            Self::Update => "Updated",
        }
    }
}

/// Event as returned by the calendar store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Store-assigned id.
    pub id: String,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Location text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start; `None` for all-day or unparsed times.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// End; `None` for all-day or unparsed times.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// `confirmed`, `tentative` or `cancelled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Link to the event in the calendar UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
    /// Generated video-meeting link, when conferencing was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hangout_link: Option<String>,
    /// Private extended properties.
    #[serde(default)]
    pub private_metadata: BTreeMap<String, String>,
}

impl CalendarEvent {
    /// Cancelled events are ignored by the case-number lookup.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("cancelled"))
    }

    /// Private metadata value for `key`.
    #[must_use]
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.private_metadata.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn payload_serializes_millisecond_timestamps() {
        let payload = CalendarEventPayload {
            summary: "Hearing".into(),
            description: String::new(),
            location: None,
            start: Utc.with_ymd_and_hms(2024, 9, 15, 10, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 9, 15, 11, 0, 0).unwrap(),
            attendees: vec![],
            private_metadata: BTreeMap::new(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["start"], "2024-09-15T10:00:00.000Z");
        assert_eq!(json["end"], "2024-09-15T11:00:00.000Z");
        assert!(json.get("location").is_none());
    }

    #[test]
    fn cancelled_status_is_case_insensitive() {
        let event = CalendarEvent {
            id: "evt".into(),
            status: Some("Cancelled".into()),
            ..CalendarEvent::default()
        };
        assert!(event.is_cancelled());
        assert!(!CalendarEvent::default().is_cancelled());
    }

    #[test]
    fn payload_kind_tags() {
        assert_eq!(PayloadKind::Create.source_tag(), "emailAnalysis");
        assert_eq!(PayloadKind::Update.source_tag(), "emailAnalysisUpdate");
    }
}
