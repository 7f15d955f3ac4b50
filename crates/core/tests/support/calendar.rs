use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use genieflow_core::CalendarStore;
use genieflow_domain::{
    CalendarEvent, CalendarEventPayload, GenieFlowError, Result as DomainResult,
};

/// One recorded interaction with the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Query { key: String, value: String, max_results: u32 },
    Create { payload: CalendarEventPayload, conferencing: bool },
    Update { event_id: String, payload: CalendarEventPayload, conferencing: bool },
}

#[derive(Default)]
struct State {
    events: Vec<CalendarEvent>,
    calls: Vec<StoreCall>,
    next_id: usize,
    query_failures: VecDeque<GenieFlowError>,
    write_failures: VecDeque<GenieFlowError>,
}

/// In-memory `CalendarStore`.
///
/// Created and updated events are kept with their private metadata, so a
/// later query for the same case number finds them. Failures can be queued
/// per operation family and are consumed one call at a time.
#[derive(Clone, Default)]
pub struct MockCalendarStore {
    state: Arc<Mutex<State>>,
    write_delay: Option<Duration>,
}

impl MockCalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing events.
    pub fn with_events(self, events: Vec<CalendarEvent>) -> Self {
        self.state.lock().unwrap().events.extend(events);
        self
    }

    /// Sleep inside create/update so concurrent callers overlap.
    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = Some(delay);
        self
    }

    pub fn fail_next_query(&self, error: GenieFlowError) {
        self.state.lock().unwrap().query_failures.push_back(error);
    }

    pub fn fail_next_write(&self, error: GenieFlowError) {
        self.state.lock().unwrap().write_failures.push_back(error);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn creates(&self) -> Vec<CalendarEventPayload> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Create { payload, .. } => Some(payload),
                _ => None,
            })
            .collect()
    }

    pub fn updates(&self) -> Vec<(String, CalendarEventPayload)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Update { event_id, payload, .. } => Some((event_id, payload)),
                _ => None,
            })
            .collect()
    }

    pub fn events(&self) -> Vec<CalendarEvent> {
        self.state.lock().unwrap().events.clone()
    }

    fn record_event(
        event_id: String,
        payload: &CalendarEventPayload,
        conferencing: bool,
    ) -> CalendarEvent {
        CalendarEvent {
            html_link: Some(format!("https://calendar.test/event?eid={event_id}")),
            hangout_link: conferencing.then(|| format!("https://meet.test/{event_id}")),
            id: event_id,
            summary: Some(payload.summary.clone()),
            description: Some(payload.description.clone()),
            location: payload.location.clone(),
            start: Some(payload.start),
            end: Some(payload.end),
            status: Some("confirmed".into()),
            private_metadata: payload.private_metadata.clone(),
        }
    }

    async fn pause(&self) {
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl CalendarStore for MockCalendarStore {
    async fn query_by_private_property(
        &self,
        key: &str,
        value: &str,
        max_results: u32,
    ) -> DomainResult<Vec<CalendarEvent>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::Query {
            key: key.to_string(),
            value: value.to_string(),
            max_results,
        });
        if let Some(error) = state.query_failures.pop_front() {
            return Err(error);
        }

        let matches = state
            .events
            .iter()
            .filter(|event| event.metadata(key) == Some(value))
            .take(usize::try_from(max_results).unwrap_or(usize::MAX))
            .cloned()
            .collect();
        drop(state);
        Ok(matches)
    }

    async fn create_event(
        &self,
        payload: &CalendarEventPayload,
        enable_conferencing: bool,
    ) -> DomainResult<CalendarEvent> {
        {
            let mut state = self.state.lock().unwrap();
            state.calls.push(StoreCall::Create {
                payload: payload.clone(),
                conferencing: enable_conferencing,
            });
            if let Some(error) = state.write_failures.pop_front() {
                return Err(error);
            }
        }
        self.pause().await;

        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let event =
            Self::record_event(format!("evt-{}", state.next_id), payload, enable_conferencing);
        state.events.push(event.clone());
        drop(state);
        Ok(event)
    }

    async fn update_event(
        &self,
        event_id: &str,
        payload: &CalendarEventPayload,
        enable_conferencing: bool,
    ) -> DomainResult<CalendarEvent> {
        {
            let mut state = self.state.lock().unwrap();
            state.calls.push(StoreCall::Update {
                event_id: event_id.to_string(),
                payload: payload.clone(),
                conferencing: enable_conferencing,
            });
            if let Some(error) = state.write_failures.pop_front() {
                return Err(error);
            }
        }
        self.pause().await;

        let mut state = self.state.lock().unwrap();
        let Some(index) = state.events.iter().position(|event| event.id == event_id) else {
            return Err(GenieFlowError::NotFound(format!("event {event_id}")));
        };
        let event = Self::record_event(event_id.to_string(), payload, enable_conferencing);
        state.events[index] = event.clone();
        drop(state);
        Ok(event)
    }
}
