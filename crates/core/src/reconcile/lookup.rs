//! Case-number lookup against the calendar store.

use std::sync::Arc;

use genieflow_domain::constants::{
    DEFAULT_LOOKUP_MAX_RESULTS, MAX_LOOKUP_MAX_RESULTS, META_CASE_NUMBER,
};
use genieflow_domain::CalendarEvent;
use tracing::{debug, instrument, warn};

use crate::calendar_ports::CalendarStore;

/// Finds the event previously created for a case number.
#[derive(Clone)]
pub struct EventLookup {
    store: Arc<dyn CalendarStore>,
    max_results: u32,
}

impl EventLookup {
    /// Lookup over `store` with the default result bound.
    #[must_use]
    pub fn new(store: Arc<dyn CalendarStore>) -> Self {
        Self { store, max_results: DEFAULT_LOOKUP_MAX_RESULTS }
    }

    /// Bound the result set requested from the store (clamped to 1..=5).
    #[must_use]
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results.clamp(1, MAX_LOOKUP_MAX_RESULTS);
        self
    }

    /// Return the existing event tagged with `case_number`, if any.
    ///
    /// Blank case numbers never reach the store. Store failures are logged and
    /// reported as "not found" so the caller falls back to creating an event.
    #[instrument(skip(self))]
    pub async fn find_by_case_number(&self, case_number: Option<&str>) -> Option<CalendarEvent> {
        let Some(case_number) = case_number.map(str::trim).filter(|c| !c.is_empty()) else {
            debug!("no case number; skipping lookup");
            return None;
        };

        match self
            .store
            .query_by_private_property(META_CASE_NUMBER, case_number, self.max_results)
            .await
        {
            Ok(events) => select_existing(case_number, events),
            Err(error) => {
                warn!(case_number, error = %error, "case-number lookup failed; treating as new event");
                None
            }
        }
    }
}

/// First non-cancelled event in store order.
fn select_existing(case_number: &str, events: Vec<CalendarEvent>) -> Option<CalendarEvent> {
    let returned = events.len();
    let mut live = events.into_iter().filter(|event| !event.is_cancelled());
    let selected = live.next()?;

    let extra = live.count();
    if extra > 0 {
        warn!(
            case_number,
            matches = extra + 1,
            returned,
            event_id = %selected.id,
            "multiple calendar events share a case number; using the first"
        );
    } else {
        debug!(case_number, event_id = %selected.id, "found existing calendar event");
    }

    Some(selected)
}
