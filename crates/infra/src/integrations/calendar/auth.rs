//! Access-token sources for the Google adapter.
//!
//! Token acquisition and refresh happen elsewhere; these providers only hand
//! over a bearer token that is already valid.

use async_trait::async_trait;
use genieflow_domain::{GenieFlowError, Result};

/// Environment variable read by [`EnvTokenProvider`].
pub const ACCESS_TOKEN_ENV: &str = "GENIEFLOW_GOOGLE_ACCESS_TOKEN";

/// Source of bearer tokens for calendar requests.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Bearer token for the next request.
    ///
    /// # Errors
    /// `Auth` when no usable token is available.
    async fn access_token(&self) -> Result<String>;
}

/// Fixed token, typically from a config file or a test.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Wrap a token; blank tokens are rejected on use, not here.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider").field("token", &"<redacted>").finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(GenieFlowError::Auth("configured access token is empty".into()));
        }
        Ok(token.to_string())
    }
}

/// Reads the token from the environment on every request, so an external
/// refresher can rotate it without restarting the process.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    var: String,
}

impl EnvTokenProvider {
    /// Read [`ACCESS_TOKEN_ENV`].
    #[must_use]
    pub fn new() -> Self {
        Self::from_var(ACCESS_TOKEN_ENV)
    }

    /// Read a custom variable.
    #[must_use]
    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessTokenProvider for EnvTokenProvider {
    async fn access_token(&self) -> Result<String> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(GenieFlowError::Auth(format!("{} not set", self.var))),
        }
    }
}
