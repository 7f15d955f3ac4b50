//! Shared helpers for `genieflow-app` integration tests.

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use genieflow_core::CalendarStore;
use genieflow_domain::{
    AnalyzedEmail, CalendarEvent, CalendarEventPayload, Config, EmailProvenance, MeetingDetails,
    Result as DomainResult, SweepConfig,
};
use genieflow_lib::AppContext;

/// Minimal in-memory store: keeps created events so later lookups find them.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    events: Arc<Mutex<Vec<CalendarEvent>>>,
    writes: Arc<Mutex<Vec<String>>>,
}

impl InMemoryStore {
    /// Operation log: `create:<id>` / `update:<id>`.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    fn store(&self, id: String, payload: &CalendarEventPayload) -> CalendarEvent {
        let event = CalendarEvent {
            id,
            summary: Some(payload.summary.clone()),
            start: Some(payload.start),
            end: Some(payload.end),
            private_metadata: payload.private_metadata.clone(),
            ..CalendarEvent::default()
        };
        let mut events = self.events.lock().unwrap();
        events.retain(|existing| existing.id != event.id);
        events.push(event.clone());
        drop(events);
        event
    }
}

#[async_trait]
impl CalendarStore for InMemoryStore {
    async fn query_by_private_property(
        &self,
        key: &str,
        value: &str,
        max_results: u32,
    ) -> DomainResult<Vec<CalendarEvent>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.metadata(key) == Some(value))
            .take(usize::try_from(max_results).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn create_event(
        &self,
        payload: &CalendarEventPayload,
        _enable_conferencing: bool,
    ) -> DomainResult<CalendarEvent> {
        let id = format!("evt-{}", self.writes.lock().unwrap().len() + 1);
        self.writes.lock().unwrap().push(format!("create:{id}"));
        Ok(self.store(id, payload))
    }

    async fn update_event(
        &self,
        event_id: &str,
        payload: &CalendarEventPayload,
        _enable_conferencing: bool,
    ) -> DomainResult<CalendarEvent> {
        self.writes.lock().unwrap().push(format!("update:{event_id}"));
        Ok(self.store(event_id.to_string(), payload))
    }
}

pub fn test_config() -> Config {
    Config {
        sweep: SweepConfig { inter_request_delay_ms: 0, max_backoff_ms: 0 },
        ..Config::default()
    }
}

pub fn context_with(store: &InMemoryStore) -> AppContext {
    AppContext::with_store(test_config(), Arc::new(store.clone()))
}

pub fn hearing_email(message_id: &str, case_number: &str, time: &str) -> AnalyzedEmail {
    AnalyzedEmail::new(
        EmailProvenance::new("Hearing Notice").with_message_id(message_id),
        MeetingDetails {
            case_number: Some(case_number.into()),
            event_type: Some("Hearing".into()),
            event_date: Some("2024-09-15".into()),
            event_time: Some(time.into()),
            location: Some("Courtroom 5B".into()),
            ..MeetingDetails::default()
        },
    )
}
