use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_AUTH_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the client core.
///
/// The general API root serves properties, portfolios, analysis, feedback and
/// contact requests; the auth root serves `/api/auth/*` and `/api/subscriptions/*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub auth_url: String,

    /// Access token for the basemap provider. `None` degrades the map panel
    /// to a configuration notice.
    pub map_access_token: Option<String>,

    pub request_timeout_secs: u64,

    /// Where the session tokens are persisted. `None` keeps them in memory.
    pub token_file: Option<PathBuf>,

    /// Where the last-used property filters are persisted.
    pub filter_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            map_access_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            token_file: None,
            filter_file: None,
        }
    }
}

impl Config {
    /// Defaults, overridden by `ATLAS_*` environment variables.
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(v) = non_empty_var("ATLAS_API_URL") {
            self.api_url = v;
        }
        if let Some(v) = non_empty_var("ATLAS_AUTH_URL") {
            self.auth_url = v;
        }
        if let Some(v) = non_empty_var("ATLAS_MAPBOX_ACCESS_TOKEN") {
            self.map_access_token = Some(v);
        }
        if let Some(v) = non_empty_var("ATLAS_REQUEST_TIMEOUT_SECS") {
            match v.parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => tracing::warn!("ignoring invalid ATLAS_REQUEST_TIMEOUT_SECS '{v}'"),
            }
        }
        if let Some(v) = non_empty_var("ATLAS_TOKEN_FILE") {
            self.token_file = Some(PathBuf::from(v));
        }
        if let Some(v) = non_empty_var("ATLAS_FILTER_FILE") {
            self.filter_file = Some(PathBuf::from(v));
        }
        self
    }

    /// Check that both base URLs parse and the timeout is usable.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [("api_url", &self.api_url), ("auth_url", &self.auth_url)] {
            let parsed = url::Url::parse(value)
                .map_err(|e| CoreError::Config(format!("{name} '{value}' is not a valid URL: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(CoreError::Config(format!(
                    "{name} '{value}' must use http or https"
                )));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::Config("request timeout must be at least 1 second".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The map panel only renders when a non-blank token is configured.
    #[must_use]
    pub fn map_token(&self) -> Option<&str> {
        self.map_access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
