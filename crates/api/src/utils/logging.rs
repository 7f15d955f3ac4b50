//! Structured logging for command execution

use std::time::Duration;

use genieflow_domain::{GenieFlowError, ReconcileOutcome, SweepReport};
use tracing::{error, info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a logical identifier (e.g. `"calendar::reconcile_email"`) and
/// must not carry sensitive values.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Log a reconciliation result. Skips are informational; errors are logged
/// with their stable label.
pub fn log_reconcile_outcome(command: &str, outcome: &ReconcileOutcome) {
    let status = outcome.status();
    match outcome {
        ReconcileOutcome::Created { event } | ReconcileOutcome::Updated { event } => {
            info!(command, %status, event_id = %event.id, "reconcile_outcome");
        }
        ReconcileOutcome::SkippedNoCaseNumber | ReconcileOutcome::SkippedNoHearingDetails => {
            info!(command, %status, "reconcile_outcome");
        }
        ReconcileOutcome::Error { error } => {
            error!(command, %status, error_type = error_label(error), error = %error, "reconcile_outcome");
        }
    }
}

/// Log the per-status counts of a finished sweep.
pub fn log_sweep_report(command: &str, report: &SweepReport) {
    info!(
        command,
        processed = report.processed(),
        created = report.created,
        updated = report.updated,
        skipped = report.skipped,
        errors = report.errors,
        already_attempted = report.already_attempted,
        "sweep_report"
    );
}

/// Convert a `GenieFlowError` into a stable label suitable for logging.
#[inline]
#[must_use]
pub const fn error_label(error: &GenieFlowError) -> &'static str {
    match error {
        GenieFlowError::Config(_) => "config",
        GenieFlowError::Network(_) => "network",
        GenieFlowError::Auth(_) => "auth",
        GenieFlowError::RateLimited(_) => "rate_limited",
        GenieFlowError::NotFound(_) => "not_found",
        GenieFlowError::InvalidInput(_) => "invalid_input",
        GenieFlowError::Internal(_) => "internal",
    }
}
