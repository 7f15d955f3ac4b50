//! Calendar store port interfaces
//!
//! The reconciler only ever talks to the external calendar through this
//! trait. Authentication, token refresh and transport retries belong to the
//! implementation.

use async_trait::async_trait;
use genieflow_domain::{CalendarEvent, CalendarEventPayload, Result};

/// Trait for the external calendar store
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// List events whose private metadata has `key == value`, returning at
    /// most `max_results` of them.
    async fn query_by_private_property(
        &self,
        key: &str,
        value: &str,
        max_results: u32,
    ) -> Result<Vec<CalendarEvent>>;

    /// Create a new event, optionally asking the store to generate a
    /// conferencing link.
    async fn create_event(
        &self,
        payload: &CalendarEventPayload,
        enable_conferencing: bool,
    ) -> Result<CalendarEvent>;

    /// Replace an existing event.
    async fn update_event(
        &self,
        event_id: &str,
        payload: &CalendarEventPayload,
        enable_conferencing: bool,
    ) -> Result<CalendarEvent>;
}
