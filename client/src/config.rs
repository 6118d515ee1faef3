//! Client configuration loaded via OrthoConfig.
//!
//! Accessors apply defaults and validation so the composition root only ever
//! sees well-formed settings.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::ports::{PermissionStatus, UnknownPermissionStatus};
use crate::domain::{Platform, UnknownPlatform};

const DEFAULT_API_BASE: &str = "https://api.notigasm.com";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The API base is not an absolute http(s) URL.
    #[error("invalid api base '{value}': {reason}")]
    InvalidApiBase { value: String, reason: String },
    /// A zero timeout would fail every request.
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
    /// Unrecognised platform name.
    #[error(transparent)]
    Platform(#[from] UnknownPlatform),
    /// Unrecognised permission state.
    #[error(transparent)]
    Permission(#[from] UnknownPermissionStatus),
}

/// Runtime settings for the Notigasm client.
///
/// Every key except the timeout is optional.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NOTIGASM")]
pub struct ClientSettings {
    /// Backend base URL.
    pub api_base: Option<String>,
    /// Per-request timeout in milliseconds.
    #[ortho_config(default = 10_000)]
    pub request_timeout_ms: u64,
    /// Signed-in user's handle.
    pub handle: Option<String>,
    /// Platform override (`android`, `ios`, `web`, `desktop`).
    pub platform: Option<String>,
    /// Push token issued by the static platform binding.
    pub push_token: Option<String>,
    /// Permission state before any prompt.
    pub permission: Option<String>,
    /// Answer given when the permission prompt is shown.
    pub prompt_answer: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            handle: None,
            platform: None,
            push_token: None,
            permission: None,
            prompt_answer: None,
        }
    }
}

impl ClientSettings {
    /// Return the backend base URL with any trailing slash removed.
    pub fn api_base(&self) -> Result<Url, SettingsError> {
        let raw = self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE).trim();
        let invalid = |reason: String| SettingsError::InvalidApiBase {
            value: raw.to_owned(),
            reason,
        };
        let url = Url::parse(raw.trim_end_matches('/')).map_err(|err| invalid(err.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    /// Return the per-request timeout, defaulting to ten seconds.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self.request_timeout_ms {
            0 => Err(SettingsError::ZeroTimeout),
            millis => Ok(Duration::from_millis(millis)),
        }
    }

    /// Return the configured handle, if any.
    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    /// Return the target platform, defaulting to the compiled one.
    pub fn platform(&self) -> Result<Platform, SettingsError> {
        self.platform
            .as_deref()
            .map_or(Ok(Platform::current()), |raw| Ok(raw.parse()?))
    }

    /// Return the push token the static binding should issue.
    pub fn push_token(&self) -> Option<&str> {
        self.push_token.as_deref()
    }

    /// Return the initial permission state.
    pub fn permission(&self) -> Result<PermissionStatus, SettingsError> {
        parse_permission(self.permission.as_deref(), PermissionStatus::Undetermined)
    }

    /// Return the simulated prompt answer.
    pub fn prompt_answer(&self) -> Result<PermissionStatus, SettingsError> {
        parse_permission(self.prompt_answer.as_deref(), PermissionStatus::Granted)
    }
}

fn parse_permission(
    raw: Option<&str>,
    fallback: PermissionStatus,
) -> Result<PermissionStatus, SettingsError> {
    raw.map_or(Ok(fallback), |value| Ok(value.parse()?))
}
