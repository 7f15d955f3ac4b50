//! Application context - dependency injection container

use std::sync::Arc;

use genieflow_core::{CalendarStore, EmailCalendarWorkflow};
use genieflow_domain::{Config, Result};
use genieflow_infra::GoogleCalendarStore;
use tracing::info;

/// Application context - holds the workflow and the config it was built from
pub struct AppContext {
    /// Settings the context was built from.
    pub config: Config,
    /// Shared workflow; holds the dedup set and case locks for the process.
    pub workflow: Arc<EmailCalendarWorkflow>,
}

impl AppContext {
    /// Wire the Google Calendar store into the workflow.
    ///
    /// # Errors
    /// Returns `GenieFlowError::Config` when the calendar settings are
    /// unusable (for example a malformed API base URL).
    pub fn new(config: Config) -> Result<Self> {
        let store = GoogleCalendarStore::from_config(&config.calendar)?;
        info!(
            calendar_id = %config.calendar.calendar_id,
            api_base_url = %store.events_url(),
            "Google Calendar store initialised"
        );
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Build the context around any calendar store.
    #[must_use]
    pub fn with_store(config: Config, store: Arc<dyn CalendarStore>) -> Self {
        let workflow = Arc::new(EmailCalendarWorkflow::new(store, &config));
        Self { config, workflow }
    }
}
