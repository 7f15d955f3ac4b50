//! # GenieFlow App
//!
//! Application layer - commands, wiring and the CLI entry point.
//!
//! This crate contains:
//! - Commands (reconcile one email, update a known event, batch sweep)
//! - Application context (dependency injection)
//! - Logging helpers shared by the commands and the binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the Google Calendar adapter into the core workflow

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
