//! # GenieFlow Core
//!
//! Business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The calendar store port (trait)
//! - The meeting-event reconciler and its event lookup
//! - The email-to-calendar workflow (locking, dedup, pacing)
//!
//! ## Architecture Principles
//! - Only depends on `genieflow-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod calendar_ports;
pub mod reconcile;
pub mod workflow;

pub use calendar_ports::CalendarStore;
pub use reconcile::{
    build_payload, resolve_schedule, ConferencingDetector, EventLookup, EventSchedule,
    LocationKeywordDetector, MeetingEventReconciler,
};
pub use workflow::{
    CaseLocks, EmailCalendarWorkflow, ReconcileAction, RequestPacer, SessionDedup,
};
