//! # GenieFlow Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The Google Calendar implementation of `CalendarStore`
//! - A retrying HTTP client
//! - Configuration loading (files + environment)
//!
//! ## Architecture
//! - Implements traits defined in `genieflow-core`
//! - Contains all "impure" code (HTTP, filesystem, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::calendar::{
    AccessTokenProvider, EnvTokenProvider, GoogleCalendarStore, StaticTokenProvider,
};
