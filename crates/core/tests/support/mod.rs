//! Shared test helpers for `genieflow-core` integration tests.
//!
//! Fixtures for analysed emails plus an in-memory calendar store that records
//! every call, so tests can assert on store traffic as well as outcomes.

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

pub mod calendar;
pub mod fixtures;

pub use calendar::{MockCalendarStore, StoreCall};
pub use fixtures::*;
