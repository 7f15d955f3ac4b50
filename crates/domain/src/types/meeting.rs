//! Meeting details extracted from an email, plus the email's provenance.

use serde::{Deserialize, Serialize};

use crate::constants::GMAIL_MESSAGE_LINK_PREFIX;

/// Structured meeting details produced by the extraction service.
///
/// Every field is optional; blank strings are treated the same as absent
/// ones by the accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    /// Case reference; the key used to find an earlier event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    /// Hearing, deposition, status conference, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Free-text summary from the extractor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    /// `10:00 AM` or `14:30`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    /// Time of day on `event_date`, or a full UTC timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Courtroom, address or video-meeting link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Raw invitee addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    /// Explicit conferencing request; overrides location sniffing when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conferencing_requested: Option<bool>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl MeetingDetails {
    /// Trimmed case number, `None` when blank.
    #[must_use]
    pub fn case_number(&self) -> Option<&str> {
        non_blank(self.case_number.as_deref())
    }

    /// Trimmed event type, `None` when blank.
    #[must_use]
    pub fn event_type(&self) -> Option<&str> {
        non_blank(self.event_type.as_deref())
    }

    /// Trimmed description, `None` when blank.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Trimmed event date, `None` when blank.
    #[must_use]
    pub fn event_date(&self) -> Option<&str> {
        non_blank(self.event_date.as_deref())
    }

    /// Trimmed start time, `None` when blank.
    #[must_use]
    pub fn event_time(&self) -> Option<&str> {
        non_blank(self.event_time.as_deref())
    }

    /// Trimmed end time, `None` when blank.
    #[must_use]
    pub fn end_time(&self) -> Option<&str> {
        non_blank(self.end_time.as_deref())
    }

    /// Trimmed location, `None` when blank.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    /// Raw attendee list; empty when the extraction produced none.
    #[must_use]
    pub fn attendees(&self) -> &[String] {
        self.attendees.as_deref().unwrap_or_default()
    }
}

/// Where a set of meeting details came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailProvenance {
    /// Subject line; may be empty.
    #[serde(default)]
    pub subject: String,
    /// Mail-provider message id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Mail-provider thread id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

impl EmailProvenance {
    /// Provenance with a subject and no ids.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self { subject: subject.into(), message_id: None, thread_id: None }
    }

    /// Set the message id.
    #[must_use]
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    /// Set the thread id.
    #[must_use]
    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    /// Trimmed message id, `None` when blank.
    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        non_blank(self.message_id.as_deref())
    }

    /// Trimmed thread id, `None` when blank.
    #[must_use]
    pub fn thread_id(&self) -> Option<&str> {
        non_blank(self.thread_id.as_deref())
    }

    /// Trimmed subject, `None` when blank.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        non_blank(Some(&self.subject))
    }

    /// Deep link back to the originating message, when its id is known.
    #[must_use]
    pub fn email_link(&self) -> Option<String> {
        self.message_id().map(|id| format!("{GMAIL_MESSAGE_LINK_PREFIX}{id}"))
    }
}

/// One analysed email: provenance plus whatever the extractor found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedEmail {
    /// Where the email came from.
    pub provenance: EmailProvenance,
    /// What the extractor found in it.
    #[serde(default)]
    pub details: MeetingDetails,
}

impl AnalyzedEmail {
    /// Pair provenance with extracted details.
    #[must_use]
    pub const fn new(provenance: EmailProvenance, details: MeetingDetails) -> Self {
        Self { provenance, details }
    }

    /// Identifier used for per-session dedup: message id, then thread id.
    ///
    /// `None` when the email carries neither; such emails are never treated
    /// as already attempted.
    #[must_use]
    pub fn dedup_key(&self) -> Option<String> {
        self.provenance
            .message_id()
            .or_else(|| self.provenance.thread_id())
            .map(str::to_string)
    }
}
