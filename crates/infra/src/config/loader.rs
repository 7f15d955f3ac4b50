//! Configuration loader
//!
//! Builds the application [`Config`] from defaults, an optional file and the
//! environment.
//!
//! ## Loading Strategy
//! 1. Start from `Config::default()`
//! 2. Overlay a config file: the explicit path if one is given, otherwise
//!    the first file found by [`probe_config_paths`] (a missing file is fine)
//! 3. Overlay environment variables
//!
//! Files may be JSON or TOML (detected by extension). Every field is
//! optional in a file; omitted fields keep their defaults.
//!
//! ## Environment Variables
//! - `GENIEFLOW_CALENDAR_API_BASE_URL`: Calendar API base URL
//! - `GENIEFLOW_CALENDAR_ID`: Calendar to write into
//! - `GENIEFLOW_CALENDAR_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `GENIEFLOW_CALENDAR_MAX_ATTEMPTS`: Attempts per request (initial + retries)
//! - `GENIEFLOW_LOOKUP_MAX_RESULTS`: Case-number lookup result limit
//! - `GENIEFLOW_REQUIRE_CASE_NUMBER`: Skip emails without a case number (true/false)
//! - `GENIEFLOW_SWEEP_DELAY_MS`: Base delay between sweep items
//! - `GENIEFLOW_SWEEP_MAX_BACKOFF_MS`: Upper bound for rate-limit backoff
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./genieflow.{toml,json}` then `./config.{toml,json}`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use genieflow_domain::{Config, GenieFlowError, Result};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["genieflow.toml", "genieflow.json", "config.toml", "config.json"];

/// Load configuration: defaults, then a config file, then environment.
///
/// An explicit `path` replaces file probing and must exist.
///
/// # Errors
/// Returns `GenieFlowError::Config` if the file is missing or malformed, or
/// an environment variable holds an invalid value.
pub fn load_with(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(&found)?,
            None => {
                tracing::debug!("No config file found; using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file over the defaults.
///
/// # Errors
/// Returns `GenieFlowError::Config` if:
/// - File not found
/// - File format is invalid
pub fn load_from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(GenieFlowError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| GenieFlowError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

/// Overlay any `GENIEFLOW_*` variables that are set onto `config`.
///
/// # Errors
/// Returns `GenieFlowError::Config` for unparsable numbers or booleans.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(url) = env_string("GENIEFLOW_CALENDAR_API_BASE_URL") {
        config.calendar.api_base_url = url;
    }
    if let Some(id) = env_string("GENIEFLOW_CALENDAR_ID") {
        config.calendar.calendar_id = id;
    }
    if let Some(secs) = env_parse("GENIEFLOW_CALENDAR_TIMEOUT_SECS")? {
        config.calendar.request_timeout_secs = secs;
    }
    if let Some(attempts) = env_parse("GENIEFLOW_CALENDAR_MAX_ATTEMPTS")? {
        config.calendar.max_attempts = attempts;
    }
    if let Some(limit) = env_parse("GENIEFLOW_LOOKUP_MAX_RESULTS")? {
        config.reconciler.lookup_max_results = limit;
    }
    if let Some(required) = env_bool("GENIEFLOW_REQUIRE_CASE_NUMBER")? {
        config.reconciler.require_case_number = required;
    }
    if let Some(delay) = env_parse("GENIEFLOW_SWEEP_DELAY_MS")? {
        config.sweep.inter_request_delay_ms = delay;
    }
    if let Some(backoff) = env_parse("GENIEFLOW_SWEEP_MAX_BACKOFF_MS")? {
        config.sweep.max_backoff_ms = backoff;
    }
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(std::ffi::OsStr::to_str).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GenieFlowError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| GenieFlowError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(GenieFlowError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Non-blank environment variable.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_string(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| GenieFlowError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str) -> Result<Option<bool>> {
    let Some(raw) = env_string(key) else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(GenieFlowError::Config(format!("Invalid boolean for {key}: {raw}"))),
    }
}
