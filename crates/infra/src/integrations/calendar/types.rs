//! Google Calendar v3 wire types.
//!
//! Only the fields the reconciler reads or writes are modelled; everything
//! else in Google's event resource is ignored on the way in.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use genieflow_domain::{format_iso_millis, CalendarEvent, CalendarEventPayload};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conference solution requested when conferencing is enabled.
pub const HANGOUTS_MEET: &str = "hangoutsMeet";

/// Event body sent on create (POST) and update (PUT).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventBody {
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start: GoogleEventTime,
    pub end: GoogleEventTime,
    pub attendees: Vec<GoogleAttendee>,
    pub extended_properties: GoogleExtendedProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_data: Option<GoogleConferenceData>,
}

impl GoogleEventBody {
    #[must_use]
    pub fn from_payload(payload: &CalendarEventPayload, enable_conferencing: bool) -> Self {
        Self {
            summary: payload.summary.clone(),
            description: payload.description.clone(),
            location: payload.location.clone(),
            start: GoogleEventTime::utc(payload.start),
            end: GoogleEventTime::utc(payload.end),
            attendees: payload
                .attendees
                .iter()
                .map(|attendee| GoogleAttendee { email: attendee.email.clone() })
                .collect(),
            extended_properties: GoogleExtendedProperties {
                private: payload.private_metadata.clone(),
            },
            conference_data: enable_conferencing.then(GoogleConferenceData::meet),
        }
    }
}

/// `start` / `end` of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// All-day events carry a bare date instead of `dateTime`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl GoogleEventTime {
    #[must_use]
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self {
            date_time: Some(format_iso_millis(instant)),
            date: None,
            time_zone: Some("UTC".into()),
        }
    }

    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        if let Some(date_time) = self.date_time.as_deref() {
            return DateTime::parse_from_rfc3339(date_time)
                .ok()
                .map(|parsed| parsed.with_timezone(&Utc));
        }
        let date = NaiveDate::parse_from_str(self.date.as_deref()?, "%Y-%m-%d").ok()?;
        Some(date.and_hms_opt(0, 0, 0)?.and_utc())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleAttendee {
    pub email: String,
}

/// Only the `private` scope is used; `shared` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleExtendedProperties {
    #[serde(default)]
    pub private: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleConferenceData {
    pub create_request: GoogleCreateConferenceRequest,
}

impl GoogleConferenceData {
    /// Ask Google to generate a Meet link. The request id only has to be
    /// unique per request.
    #[must_use]
    pub fn meet() -> Self {
        Self {
            create_request: GoogleCreateConferenceRequest {
                request_id: Uuid::new_v4().to_string(),
                conference_solution_key: GoogleConferenceSolutionKey {
                    kind: HANGOUTS_MEET.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCreateConferenceRequest {
    pub request_id: String,
    pub conference_solution_key: GoogleConferenceSolutionKey,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoogleConferenceSolutionKey {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event resource as returned by Google.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventResource {
    pub id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: Option<GoogleEventTime>,
    pub end: Option<GoogleEventTime>,
    pub status: Option<String>,
    pub html_link: Option<String>,
    pub hangout_link: Option<String>,
    pub extended_properties: Option<GoogleExtendedProperties>,
}

impl From<GoogleEventResource> for CalendarEvent {
    fn from(resource: GoogleEventResource) -> Self {
        Self {
            id: resource.id,
            summary: resource.summary,
            description: resource.description,
            location: resource.location,
            start: resource.start.as_ref().and_then(GoogleEventTime::to_utc),
            end: resource.end.as_ref().and_then(GoogleEventTime::to_utc),
            status: resource.status,
            html_link: resource.html_link,
            hangout_link: resource.hangout_link,
            private_metadata: resource.extended_properties.unwrap_or_default().private,
        }
    }
}

/// `events.list` response page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEventsResponse {
    #[serde(default)]
    pub items: Vec<GoogleEventResource>,
    pub next_page_token: Option<String>,
}
