//! Meeting-event reconciler - core business logic

use std::sync::Arc;

use genieflow_domain::{
    EmailProvenance, GenieFlowError, MeetingDetails, PayloadKind, ReconcileOutcome,
};
use tracing::{debug, error, info, instrument};

use super::conferencing::{ConferencingDetector, LocationKeywordDetector};
use super::payload::build_payload;
use crate::calendar_ports::CalendarStore;

/// Creates or updates the calendar event for one set of meeting details.
///
/// The reconciler holds no event state of its own; every call builds a fresh
/// payload and talks to the store directly. Deciding between create and
/// update is the caller's job (see [`crate::workflow`]).
#[derive(Clone)]
pub struct MeetingEventReconciler {
    store: Arc<dyn CalendarStore>,
    conferencing: Arc<dyn ConferencingDetector>,
}

impl MeetingEventReconciler {
    /// Create a reconciler using location sniffing for conferencing.
    #[must_use]
    pub fn new(store: Arc<dyn CalendarStore>) -> Self {
        Self { store, conferencing: Arc::new(LocationKeywordDetector) }
    }

    /// Swap the video-meeting predicate.
    #[must_use]
    pub fn with_conferencing_detector(mut self, detector: Arc<dyn ConferencingDetector>) -> Self {
        self.conferencing = detector;
        self
    }

    /// Create a new event from the meeting details.
    #[instrument(
        skip_all,
        fields(case_number = details.case_number().unwrap_or_default())
    )]
    pub async fn reconcile(
        &self,
        details: &MeetingDetails,
        provenance: &EmailProvenance,
    ) -> ReconcileOutcome {
        let Some(payload) = build_payload(details, provenance, PayloadKind::Create) else {
            debug!("no usable hearing date/time; skipping create");
            return ReconcileOutcome::SkippedNoHearingDetails;
        };
        let conferencing = self.conferencing.wants_conferencing(details);

        match self.store.create_event(&payload, conferencing).await {
            Ok(event) => {
                info!(event_id = %event.id, conferencing, "calendar event created");
                ReconcileOutcome::Created { event }
            }
            Err(error) => {
                error!(error = %error, "failed to create calendar event");
                ReconcileOutcome::Error { error }
            }
        }
    }

    /// Replace the known event `event_id` with a payload built from the
    /// meeting details.
    #[instrument(
        skip(self, details, provenance),
        fields(case_number = details.case_number().unwrap_or_default())
    )]
    pub async fn reconcile_update(
        &self,
        event_id: &str,
        details: &MeetingDetails,
        provenance: &EmailProvenance,
    ) -> ReconcileOutcome {
        let Some(payload) = build_payload(details, provenance, PayloadKind::Update) else {
            debug!("no usable hearing date/time; skipping update");
            return ReconcileOutcome::SkippedNoHearingDetails;
        };

        let event_id = event_id.trim();
        if event_id.is_empty() {
            return ReconcileOutcome::Error {
                error: GenieFlowError::InvalidInput("event id is required for an update".into()),
            };
        }
        let conferencing = self.conferencing.wants_conferencing(details);

        match self.store.update_event(event_id, &payload, conferencing).await {
            Ok(event) => {
                info!(event_id = %event.id, conferencing, "calendar event updated");
                ReconcileOutcome::Updated { event }
            }
            Err(error) => {
                error!(error = %error, "failed to update calendar event");
                ReconcileOutcome::Error { error }
            }
        }
    }
}
