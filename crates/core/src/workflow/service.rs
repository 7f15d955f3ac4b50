//! Email-to-calendar workflow: decides create vs update and drives sweeps.

use std::sync::Arc;

use genieflow_domain::{
    AnalyzedEmail, Config, ReconcileOutcome, ReconcilerConfig, SweepConfig, SweepReport,
};
use tracing::{debug, info, instrument, warn};

use super::dedup::SessionDedup;
use super::locks::CaseLocks;
use super::pacer::RequestPacer;
use crate::calendar_ports::CalendarStore;
use crate::reconcile::{resolve_schedule, ConferencingDetector, EventLookup, MeetingEventReconciler};

/// What to do with an email once the lookup has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileAction {
    /// No live event carries the case number.
    Create,
    /// Replace the event found by the lookup.
    Update {
        /// Id of the existing event.
        event_id: String,
    },
}

/// Runs lookup-then-write for analysed emails.
///
/// Same-case work is serialised in-process through [`CaseLocks`]; sweeps are
/// paced and deduplicated for the lifetime of this value.
pub struct EmailCalendarWorkflow {
    reconciler: MeetingEventReconciler,
    lookup: EventLookup,
    locks: CaseLocks,
    dedup: SessionDedup,
    config: ReconcilerConfig,
    sweep: SweepConfig,
}

impl EmailCalendarWorkflow {
    /// Workflow over `store` with the reconciler and sweep settings from
    /// `config`.
    #[must_use]
    pub fn new(store: Arc<dyn CalendarStore>, config: &Config) -> Self {
        Self {
            reconciler: MeetingEventReconciler::new(store.clone()),
            lookup: EventLookup::new(store)
                .with_max_results(config.reconciler.lookup_max_results),
            locks: CaseLocks::new(),
            dedup: SessionDedup::new(),
            config: config.reconciler.clone(),
            sweep: config.sweep.clone(),
        }
    }

    /// Swap the video-meeting predicate used on both write paths.
    #[must_use]
    pub fn with_conferencing_detector(mut self, detector: Arc<dyn ConferencingDetector>) -> Self {
        self.reconciler = self.reconciler.with_conferencing_detector(detector);
        self
    }

    /// The underlying reconciler, for explicit updates against a known id.
    #[must_use]
    pub const fn reconciler(&self) -> &MeetingEventReconciler {
        &self.reconciler
    }

    /// Reconcile one email: update the case's existing event or create one.
    #[instrument(skip_all, fields(subject = %email.provenance.subject))]
    pub async fn process(&self, email: &AnalyzedEmail) -> ReconcileOutcome {
        let details = &email.details;

        if resolve_schedule(details).is_none() {
            debug!("no usable hearing date/time");
            return ReconcileOutcome::SkippedNoHearingDetails;
        }

        let Some(case_number) = details.case_number() else {
            if self.config.require_case_number {
                debug!("no case number and one is required");
                return ReconcileOutcome::SkippedNoCaseNumber;
            }
            debug!("no case number; creating without lookup");
            return self.reconciler.reconcile(details, &email.provenance).await;
        };

        let guard = self.locks.acquire(case_number).await;
        let action = self
            .lookup
            .find_by_case_number(Some(case_number))
            .await
            .map_or(ReconcileAction::Create, |existing| ReconcileAction::Update {
                event_id: existing.id,
            });
        debug!(case_number, ?action, "reconcile action chosen");

        let outcome = match action {
            ReconcileAction::Create => self.reconciler.reconcile(details, &email.provenance).await,
            ReconcileAction::Update { event_id } => {
                self.reconciler
                    .reconcile_update(&event_id, details, &email.provenance)
                    .await
            }
        };

        drop(guard);
        self.locks.prune_idle();
        outcome
    }

    /// Process emails in order, skipping ones already attempted this session.
    ///
    /// Failures are recorded and the sweep moves on.
    #[instrument(skip_all, fields(emails = emails.len()))]
    pub async fn run_sweep(&self, emails: &[AnalyzedEmail]) -> SweepReport {
        let mut report = SweepReport::default();
        let mut pacer = RequestPacer::from_config(&self.sweep);
        let mut previous_touched_store = false;

        for email in emails {
            let key = email.dedup_key();
            if let Some(key) = key.as_deref() {
                if !self.dedup.mark_attempted(key) {
                    debug!(dedup_key = key, "already attempted this session");
                    report.record(Some(key.to_string()), email.provenance.subject.clone(), None);
                    continue;
                }
            }

            if previous_touched_store {
                pacer.wait().await;
            }

            let outcome = self.process(email).await;
            if let Some(error) = outcome.error() {
                warn!(dedup_key = key.as_deref(), error = %error, "sweep item failed");
            }
            previous_touched_store = outcome.touched_store();
            pacer.observe(&outcome);
            report.record(key, email.provenance.subject.clone(), Some(outcome));
        }

        info!(
            created = report.created,
            updated = report.updated,
            skipped = report.skipped,
            errors = report.errors,
            already_attempted = report.already_attempted,
            held_case_locks = self.held_case_locks(),
            "sweep finished"
        );
        report
    }

    /// Forget which emails were attempted.
    pub fn reset_session(&self) {
        self.dedup.clear();
    }

    /// Case numbers with a lock currently held or awaited.
    #[must_use]
    pub fn held_case_locks(&self) -> usize {
        self.locks.len()
    }

    /// Emails recorded as attempted this session.
    #[must_use]
    pub fn attempted_count(&self) -> usize {
        self.dedup.len()
    }
}
