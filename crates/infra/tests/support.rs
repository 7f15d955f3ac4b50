//! Shared helpers for `genieflow-infra` integration tests.

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use genieflow_domain::{CalendarConfig, CalendarEventPayload, EventAttendee};
use genieflow_infra::{GoogleCalendarStore, HttpClient, StaticTokenProvider};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-access-token";
pub const EVENTS_PATH: &str = "/calendar/v3/calendars/primary/events";

/// Store pointed at `server` with a static token and near-zero backoff.
pub fn store_for(server: &MockServer) -> GoogleCalendarStore {
    let config = CalendarConfig {
        api_base_url: format!("{}/calendar/v3", server.uri()),
        max_attempts: 2,
        ..CalendarConfig::default()
    };
    let http = HttpClient::builder()
        .base_backoff(Duration::from_millis(1))
        .max_attempts(2)
        .build()
        .expect("http client");

    GoogleCalendarStore::new(&config, Arc::new(StaticTokenProvider::new(TEST_TOKEN)))
        .expect("store")
        .with_http_client(http)
}

pub fn hearing_payload() -> CalendarEventPayload {
    CalendarEventPayload {
        summary: "Hearing".into(),
        description: "Case Number: CV-2024-1\n\nCreated from email: \"Hearing Notice\"".into(),
        location: Some("Courtroom 5B".into()),
        start: Utc.with_ymd_and_hms(2024, 9, 15, 10, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 9, 15, 11, 0, 0).unwrap(),
        attendees: vec![EventAttendee { email: "a@x.com".into() }],
        private_metadata: BTreeMap::from([
            ("genieflowCaseNumber".to_string(), "CV-2024-1".to_string()),
            ("genieflowProcessed".to_string(), "true".to_string()),
            ("genieflowSource".to_string(), "emailAnalysis".to_string()),
        ]),
    }
}

/// Google event resource as the API would echo it back.
pub fn google_event(id: &str, case_number: &str) -> Value {
    json!({
        "id": id,
        "status": "confirmed",
        "summary": "Hearing",
        "htmlLink": format!("https://calendar.google.com/event?eid={id}"),
        "start": { "dateTime": "2024-09-15T10:00:00Z", "timeZone": "UTC" },
        "end": { "dateTime": "2024-09-15T11:00:00Z", "timeZone": "UTC" },
        "extendedProperties": { "private": { "genieflowCaseNumber": case_number } }
    })
}
