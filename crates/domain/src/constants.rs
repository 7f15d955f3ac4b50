//! Application constants
//!
//! Centralized location for domain-level constants: private-metadata keys
//! attached to calendar events, lookup bounds, and scheduling defaults.

// Private extended-property keys written on every event this flow touches

/// Marker set on every event created or updated from an email.
pub const META_PROCESSED: &str = "genieflowProcessed";
/// Which write path last touched the event.
pub const META_SOURCE: &str = "genieflowSource";
/// Originating email message id.
pub const META_EMAIL_MESSAGE_ID: &str = "genieflowEmailMessageId";
/// Originating email thread id.
pub const META_EMAIL_THREAD_ID: &str = "genieflowEmailThreadId";
/// Case number; the only key used to find an existing event.
pub const META_CASE_NUMBER: &str = "genieflowCaseNumber";
/// Extracted event type (hearing, deposition, ...).
pub const META_EVENT_TYPE: &str = "genieflowEventType";

/// Value stored under [`META_PROCESSED`].
pub const META_PROCESSED_VALUE: &str = "true";
/// [`META_SOURCE`] value for events created from an email.
pub const SOURCE_EMAIL_ANALYSIS: &str = "emailAnalysis";
/// [`META_SOURCE`] value for events updated from an email.
pub const SOURCE_EMAIL_ANALYSIS_UPDATE: &str = "emailAnalysisUpdate";

// Event lookup

/// Result-set bound for a case-number lookup.
pub const DEFAULT_LOOKUP_MAX_RESULTS: u32 = 5;
/// Hard cap; configuration may lower the bound but never raise it.
pub const MAX_LOOKUP_MAX_RESULTS: u32 = 5;

/// Default meeting length when no usable end time is supplied.
pub const DEFAULT_EVENT_DURATION_MINUTES: i64 = 60;

// Accepted year range for extracted dates

/// Earliest accepted event year.
pub const MIN_EVENT_YEAR: i32 = 1900;
/// Latest accepted event year.
pub const MAX_EVENT_YEAR: i32 = 2200;

/// Provenance link prefix for the originating email.
pub const GMAIL_MESSAGE_LINK_PREFIX: &str = "https://mail.google.com/mail/u/0/#inbox/";

// Sweep pacing

/// Base pause between store-touching sweep items.
pub const DEFAULT_INTER_REQUEST_DELAY_MS: u64 = 1_500;
/// Ceiling for the rate-limit backoff.
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 30_000;

// Google Calendar

/// Google Calendar v3 REST root.
pub const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
/// Calendar written to when none is configured.
pub const DEFAULT_CALENDAR_ID: &str = "primary";
