use genieflow_domain::constants::{META_CASE_NUMBER, META_PROCESSED, META_SOURCE};
use genieflow_domain::{
    AnalyzedEmail, CalendarEvent, Config, EmailProvenance, MeetingDetails, SweepConfig,
};

/// Meeting details for the canonical hearing used across tests.
pub fn hearing_details(case_number: &str) -> MeetingDetails {
    MeetingDetails {
        case_number: Some(case_number.into()),
        event_type: Some("Hearing".into()),
        event_date: Some("2024-09-15".into()),
        event_time: Some("10:00".into()),
        location: Some("Zoom".into()),
        ..MeetingDetails::default()
    }
}

pub fn email(message_id: &str, subject: &str, details: MeetingDetails) -> AnalyzedEmail {
    AnalyzedEmail::new(EmailProvenance::new(subject).with_message_id(message_id), details)
}

/// Event already sitting in the calendar for `case_number`.
pub fn existing_event(id: &str, case_number: &str) -> CalendarEvent {
    let mut event = CalendarEvent {
        id: id.into(),
        summary: Some("Hearing".into()),
        status: Some("confirmed".into()),
        ..CalendarEvent::default()
    };
    event.private_metadata.insert(META_CASE_NUMBER.into(), case_number.into());
    event.private_metadata.insert(META_PROCESSED.into(), "true".into());
    event.private_metadata.insert(META_SOURCE.into(), "emailAnalysis".into());
    event
}

/// Config with pacing disabled so sweeps run instantly.
pub fn fast_config() -> Config {
    Config {
        sweep: SweepConfig { inter_request_delay_ms: 0, max_backoff_ms: 0 },
        ..Config::default()
    }
}
