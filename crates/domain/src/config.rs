//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_ID, DEFAULT_INTER_REQUEST_DELAY_MS, DEFAULT_LOOKUP_MAX_RESULTS,
    DEFAULT_MAX_BACKOFF_MS, GOOGLE_CALENDAR_API_BASE,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where events are written.
    pub calendar: CalendarConfig,
    /// Lookup and create/update behaviour.
    pub reconciler: ReconcilerConfig,
    /// Batch sweep pacing.
    pub sweep: SweepConfig,
}

/// External calendar store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// REST root, e.g. `https://www.googleapis.com/calendar/v3`.
    pub api_base_url: String,
    /// Target calendar (`primary` or a calendar address).
    pub calendar_id: String,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// Total attempts per request (initial try + retries).
    pub max_attempts: usize,
    /// Bearer token. Never serialized; the env token provider is used when
    /// unset.
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            api_base_url: GOOGLE_CALENDAR_API_BASE.to_string(),
            calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            request_timeout_secs: 30,
            max_attempts: 3,
            access_token: None,
        }
    }
}

/// Reconciliation behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Upper bound on events returned by a case-number lookup (at most 5).
    pub lookup_max_results: u32,
    /// Skip emails without a case number instead of creating undeduplicated
    /// events for them.
    pub require_case_number: bool,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self { lookup_max_results: DEFAULT_LOOKUP_MAX_RESULTS, require_case_number: false }
    }
}

/// Batch / auto-calendar sweep pacing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Base pause between store-touching items.
    pub inter_request_delay_ms: u64,
    /// Ceiling for the rate-limit backoff.
    pub max_backoff_ms: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            inter_request_delay_ms: DEFAULT_INTER_REQUEST_DELAY_MS,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
        }
    }
}
