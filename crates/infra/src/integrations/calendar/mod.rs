//! Google Calendar integration
//!
//! Implements the core `CalendarStore` port over the Google Calendar v3 REST
//! API. Bearer tokens come from an `AccessTokenProvider`; obtaining and
//! refreshing them is outside this crate.

pub mod auth;
pub mod google;
mod types;

pub use auth::{AccessTokenProvider, EnvTokenProvider, StaticTokenProvider, ACCESS_TOKEN_ENV};
pub use google::GoogleCalendarStore;
