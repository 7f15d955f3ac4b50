//! Event payload construction shared by the create and update paths.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use genieflow_domain::constants::{
    META_CASE_NUMBER, META_EMAIL_MESSAGE_ID, META_EMAIL_THREAD_ID, META_EVENT_TYPE,
    META_PROCESSED, META_PROCESSED_VALUE, META_SOURCE,
};
use genieflow_domain::{
    normalize_date_time, resolve_end_time, CalendarEventPayload, EmailProvenance, EndTimeSource,
    EventAttendee, MeetingDetails, PayloadKind,
};
use tracing::{debug, warn};

/// Title used when neither the details nor the subject carry any text.
pub const FALLBACK_EVENT_TITLE: &str = "Meeting from email";

/// Normalized start/end pair for a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchedule {
    /// Normalized start.
    pub start: DateTime<Utc>,
    /// Resolved end, strictly after `start`.
    pub end: DateTime<Utc>,
    /// How `end` was obtained.
    pub end_source: EndTimeSource,
}

/// Resolve the meeting's start and end.
///
/// `None` when the date or time is missing or cannot be normalized; absent
/// and malformed inputs are deliberately indistinguishable.
#[must_use]
pub fn resolve_schedule(details: &MeetingDetails) -> Option<EventSchedule> {
    let date = details.event_date()?;
    let time = details.event_time()?;

    let Some(start) = normalize_date_time(date, time) else {
        debug!(event_date = date, event_time = time, "could not normalize meeting start");
        return None;
    };

    let (end, end_source) = resolve_end_time(start, date, details.end_time());
    if end_source == EndTimeSource::Corrected {
        warn!(
            end_time = details.end_time().unwrap_or_default(),
            "extracted end time is not after start; defaulting to one hour"
        );
    }

    Some(EventSchedule { start, end, end_source })
}

/// Build the payload for either write path. `None` means "no hearing details".
#[must_use]
pub fn build_payload(
    details: &MeetingDetails,
    provenance: &EmailProvenance,
    kind: PayloadKind,
) -> Option<CalendarEventPayload> {
    let schedule = resolve_schedule(details)?;

    Some(CalendarEventPayload {
        summary: event_title(details, provenance),
        description: event_description(details, provenance, kind),
        location: details.location().map(str::to_string),
        start: schedule.start,
        end: schedule.end,
        attendees: event_attendees(details.attendees()),
        private_metadata: private_metadata(details, provenance, kind),
    })
}

/// `eventType`, then `description`, then the email subject.
#[must_use]
pub fn event_title(details: &MeetingDetails, provenance: &EmailProvenance) -> String {
    details
        .event_type()
        .or_else(|| details.description())
        .or_else(|| provenance.subject())
        .unwrap_or(FALLBACK_EVENT_TITLE)
        .to_string()
}

fn event_description(
    details: &MeetingDetails,
    provenance: &EmailProvenance,
    kind: PayloadKind,
) -> String {
    let mut facts = Vec::new();
    if let Some(case_number) = details.case_number() {
        facts.push(format!("Case Number: {case_number}"));
    }
    if let Some(event_type) = details.event_type() {
        facts.push(format!("Event Type: {event_type}"));
    }
    if let Some(location) = details.location() {
        facts.push(format!("Location: {location}"));
    }

    let mut sections = Vec::new();
    if !facts.is_empty() {
        sections.push(facts.join("\n"));
    }
    if let Some(description) = details.description() {
        sections.push(description.to_string());
    }

    let mut note = format!(
        "{} from email: \"{}\"",
        kind.provenance_verb(),
        provenance.subject().unwrap_or("(no subject)")
    );
    if let Some(link) = provenance.email_link() {
        note.push_str("\nView email: ");
        note.push_str(&link);
    }
    sections.push(note);

    sections.join("\n\n")
}

/// Trimmed, address-bearing, case-insensitively unique attendees.
fn event_attendees(raw: &[String]) -> Vec<EventAttendee> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|email| {
            let usable = !email.is_empty() && email.contains('@');
            if !usable && !email.is_empty() {
                debug!(email, "dropping attendee without a usable address");
            }
            usable
        })
        .filter(|email| seen.insert(email.to_lowercase()))
        .map(|email| EventAttendee { email: email.to_string() })
        .collect()
}

fn private_metadata(
    details: &MeetingDetails,
    provenance: &EmailProvenance,
    kind: PayloadKind,
) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();
    metadata.insert(META_PROCESSED.to_string(), META_PROCESSED_VALUE.to_string());
    metadata.insert(META_SOURCE.to_string(), kind.source_tag().to_string());

    let optional = [
        (META_EMAIL_MESSAGE_ID, provenance.message_id()),
        (META_EMAIL_THREAD_ID, provenance.thread_id()),
        (META_CASE_NUMBER, details.case_number()),
        (META_EVENT_TYPE, details.event_type()),
    ];
    let present = optional.into_iter().filter_map(|(key, value)| value.map(|value| (key, value)));
    for (key, value) in present {
        metadata.insert(key.to_string(), value.to_string());
    }

    metadata
}
