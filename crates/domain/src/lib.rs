//! # GenieFlow Domain
//!
//! Business domain types for turning analysed emails into calendar events.
//!
//! This crate contains:
//! - Meeting details, event payloads and reconciliation outcomes
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Date/time normalization and video-meeting detection
//!
//! ## Architecture
//! - No dependencies on other GenieFlow crates
//! - No I/O
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::conferencing::{detect_meeting_platform, is_video_meeting_location};
pub use utils::datetime::{
    format_iso_millis, normalize_date_time, normalize_to_iso, resolve_end_time, EndTimeSource,
};
