//! Calling workflow around the reconciler: lookup-then-act, per-case locking,
//! session dedup and paced sweeps.

pub mod dedup;
pub mod locks;
pub mod pacer;
pub mod service;

pub use dedup::SessionDedup;
pub use locks::{CaseGuard, CaseLocks};
pub use pacer::RequestPacer;
pub use service::{EmailCalendarWorkflow, ReconcileAction};
