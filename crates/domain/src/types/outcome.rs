//! Tagged results of a reconciliation and of a batch sweep.

use serde::{Deserialize, Serialize};

use super::event::CalendarEvent;
use crate::errors::GenieFlowError;
use crate::impl_status_conversions;

/// Result of reconciling one email against the calendar.
///
/// Nothing crosses the reconciler boundary as an `Err`; transport failures
/// arrive here as [`ReconcileOutcome::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReconcileOutcome {
    /// A new event was written.
    Created {
        /// The event as returned by the store.
        event: CalendarEvent,
    },
    /// An existing event was replaced.
    Updated {
        /// The event as returned by the store.
        event: CalendarEvent,
    },
    /// A case number was required and the email had none.
    SkippedNoCaseNumber,
    /// Date or time missing or unusable; nothing was written.
    SkippedNoHearingDetails,
    /// The store rejected the write (or the request was invalid).
    Error {
        /// Why the write failed.
        error: GenieFlowError,
    },
}

impl ReconcileOutcome {
    /// Label-only view of this outcome.
    #[must_use]
    pub const fn status(&self) -> ReconcileStatus {
        match self {
            Self::Created { .. } => ReconcileStatus::Created,
            Self::Updated { .. } => ReconcileStatus::Updated,
            Self::SkippedNoCaseNumber => ReconcileStatus::SkippedNoCaseNumber,
            Self::SkippedNoHearingDetails => ReconcileStatus::SkippedNoHearingDetails,
            Self::Error { .. } => ReconcileStatus::Error,
        }
    }

    /// The written event, for `Created` and `Updated`.
    #[must_use]
    pub const fn event(&self) -> Option<&CalendarEvent> {
        match self {
            Self::Created { event } | Self::Updated { event } => Some(event),
            _ => None,
        }
    }

    /// Id of the written event, for `Created` and `Updated`.
    #[must_use]
    pub fn event_id(&self) -> Option<&str> {
        self.event().map(|event| event.id.as_str())
    }

    /// The failure, for `Error`.
    #[must_use]
    pub const fn error(&self) -> Option<&GenieFlowError> {
        match self {
            Self::Error { error } => Some(error),
            _ => None,
        }
    }

    /// True for `Error`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Whether the calendar store was (or may have been) contacted.
    #[must_use]
    pub const fn touched_store(&self) -> bool {
        matches!(self, Self::Created { .. } | Self::Updated { .. } | Self::Error { .. })
    }
}

/// Label-only view of [`ReconcileOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileStatus {
    /// See [`ReconcileOutcome::Created`].
    Created,
    /// See [`ReconcileOutcome::Updated`].
    Updated,
    /// See [`ReconcileOutcome::SkippedNoCaseNumber`].
    SkippedNoCaseNumber,
    /// See [`ReconcileOutcome::SkippedNoHearingDetails`].
    SkippedNoHearingDetails,
    /// See [`ReconcileOutcome::Error`].
    Error,
}

impl_status_conversions!(ReconcileStatus {
    Created => "created",
    Updated => "updated",
    SkippedNoCaseNumber => "skipped_no_case_number",
    SkippedNoHearingDetails => "skipped_no_hearing_details",
    Error => "error",
});

/// One line of a sweep report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepEntry {
    /// Message or thread id; absent for emails that carry neither.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedup_key: Option<String>,
    /// Email subject, for display.
    pub subject: String,
    /// `None` when the email was already attempted earlier in this session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ReconcileOutcome>,
}

/// Summary of a batch / auto-calendar sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    /// Per-email results in input order.
    pub entries: Vec<SweepEntry>,
    /// Events created.
    pub created: usize,
    /// Events updated.
    pub updated: usize,
    /// Emails skipped for missing details or case number.
    pub skipped: usize,
    /// Writes that failed.
    pub errors: usize,
    /// Emails not processed because they were seen earlier this session.
    pub already_attempted: usize,
}

impl SweepReport {
    /// Append an entry and bump the matching counter. `outcome` is `None`
    /// for emails already attempted this session.
    pub fn record(
        &mut self,
        dedup_key: Option<String>,
        subject: String,
        outcome: Option<ReconcileOutcome>,
    ) {
        match outcome.as_ref().map(ReconcileOutcome::status) {
            Some(ReconcileStatus::Created) => self.created += 1,
            Some(ReconcileStatus::Updated) => self.updated += 1,
            Some(ReconcileStatus::SkippedNoCaseNumber | ReconcileStatus::SkippedNoHearingDetails) => {
                self.skipped += 1;
            }
            Some(ReconcileStatus::Error) => self.errors += 1,
            None => self.already_attempted += 1,
        }
        self.entries.push(SweepEntry { dedup_key, subject, outcome });
    }

    /// Entries that were actually reconciled.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.entries.len().saturating_sub(self.already_attempted)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in [
            ReconcileStatus::Created,
            ReconcileStatus::Updated,
            ReconcileStatus::SkippedNoCaseNumber,
            ReconcileStatus::SkippedNoHearingDetails,
            ReconcileStatus::Error,
        ] {
            assert_eq!(ReconcileStatus::from_str(&status.to_string()).unwrap(), status);
        }
        assert_eq!(
            ReconcileStatus::from_str("SKIPPED_NO_HEARING_DETAILS").unwrap(),
            ReconcileStatus::SkippedNoHearingDetails
        );
        assert!(ReconcileStatus::from_str("deleted").unwrap_err().contains("ReconcileStatus"));
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = ReconcileOutcome::Created {
            event: CalendarEvent { id: "evt-1".into(), ..CalendarEvent::default() },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "created");
        assert_eq!(json["event"]["id"], "evt-1");

        let skipped = serde_json::to_value(ReconcileOutcome::SkippedNoHearingDetails).unwrap();
        assert_eq!(skipped["status"], "skipped_no_hearing_details");

        let error = serde_json::to_value(ReconcileOutcome::Error {
            error: GenieFlowError::Network("boom".into()),
        })
        .unwrap();
        assert_eq!(error["status"], "error");
        assert_eq!(error["error"]["type"], "Network");
    }

    #[test]
    fn report_counts_by_status() {
        let mut report = SweepReport::default();
        report.record(
            Some("m-1".into()),
            "a".into(),
            Some(ReconcileOutcome::Created { event: CalendarEvent::default() }),
        );
        report.record(Some("m-2".into()), "b".into(), Some(ReconcileOutcome::SkippedNoHearingDetails));
        report.record(
            None,
            "c".into(),
            Some(ReconcileOutcome::Error { error: GenieFlowError::Network("x".into()) }),
        );
        report.record(Some("m-1".into()), "a".into(), None);

        assert_eq!(report.created, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors, 1);
        assert_eq!(report.already_attempted, 1);
        assert_eq!(report.processed(), 3);
    }
}
