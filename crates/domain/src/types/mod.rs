//! Domain types and models

pub mod event;
pub mod meeting;
pub mod outcome;

pub use event::{CalendarEvent, CalendarEventPayload, EventAttendee, PayloadKind};
pub use meeting::{AnalyzedEmail, EmailProvenance, MeetingDetails};
pub use outcome::{ReconcileOutcome, ReconcileStatus, SweepEntry, SweepReport};
