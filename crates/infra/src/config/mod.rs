//! Configuration loading and management
//!
//! This module provides utilities for loading application configuration
//! from files and environment variables.

pub mod loader;

// Re-export commonly used items
pub use loader::{apply_env_overrides, load_from_file, load_with, probe_config_paths};
