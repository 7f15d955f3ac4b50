//! Meeting-event reconciliation: lookup, payload building and the two write
//! paths.

pub mod conferencing;
pub mod lookup;
pub mod payload;
pub mod service;

pub use conferencing::{ConferencingDetector, LocationKeywordDetector};
pub use lookup::EventLookup;
pub use payload::{build_payload, resolve_schedule, EventSchedule};
pub use service::MeetingEventReconciler;
