//! Email-to-calendar commands

use std::time::Instant;

use genieflow_domain::{AnalyzedEmail, ReconcileOutcome, SweepReport};
use tracing::info;

use crate::utils::logging::{log_command_execution, log_reconcile_outcome, log_sweep_report};
use crate::AppContext;

/// Reconcile one analysed email: update the case's existing event or create
/// a new one.
pub async fn reconcile_email(ctx: &AppContext, email: &AnalyzedEmail) -> ReconcileOutcome {
    let command_name = "calendar::reconcile_email";
    let start = Instant::now();

    info!(command = command_name, dedup_key = email.dedup_key().as_deref(), "Reconciling email");
    let outcome = ctx.workflow.process(email).await;

    log_reconcile_outcome(command_name, &outcome);
    log_command_execution(command_name, start.elapsed(), !outcome.is_error());
    outcome
}

/// Replace a known event with details from an analysed email, skipping the
/// case-number lookup.
pub async fn update_event_from_email(
    ctx: &AppContext,
    event_id: &str,
    email: &AnalyzedEmail,
) -> ReconcileOutcome {
    let command_name = "calendar::update_event_from_email";
    let start = Instant::now();

    info!(command = command_name, event_id, "Updating event from email");
    let outcome = ctx
        .workflow
        .reconciler()
        .reconcile_update(event_id, &email.details, &email.provenance)
        .await;

    log_reconcile_outcome(command_name, &outcome);
    log_command_execution(command_name, start.elapsed(), !outcome.is_error());
    outcome
}

/// Sweep a batch of analysed emails in order. Individual failures are
/// reported, never raised.
pub async fn run_batch_calendar(ctx: &AppContext, emails: &[AnalyzedEmail]) -> SweepReport {
    let command_name = "calendar::run_batch_calendar";
    let start = Instant::now();

    info!(command = command_name, emails = emails.len(), "Starting batch calendar sweep");
    let report = ctx.workflow.run_sweep(emails).await;

    log_sweep_report(command_name, &report);
    log_command_execution(command_name, start.elapsed(), report.errors == 0);
    report
}
