//! Driven port for the OS notification service.
//!
//! Implementations wrap the platform permission API, the Android channel API,
//! and token issuance. Permission answers are memoised by the platform, so
//! asking for the status after a prompt returns the stored answer.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use super::TokenSourceError;
use crate::domain::Platform;

/// Notification permission state reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// The user has not answered a prompt yet.
    Undetermined,
    /// Notifications are allowed.
    Granted,
    /// Notifications were declined.
    Denied,
}

impl PermissionStatus {
    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undetermined => "undetermined",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a permission name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission status '{0}'; expected undetermined, granted, or denied")]
pub struct UnknownPermissionStatus(pub String);

impl FromStr for PermissionStatus {
    type Err = UnknownPermissionStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "undetermined" => Ok(Self::Undetermined),
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            _ => Err(UnknownPermissionStatus(raw.to_owned())),
        }
    }
}

/// Android notification channel importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelImportance {
    /// Silent, no visual interruption.
    Low,
    /// Sound without heads-up.
    Default,
    /// Sound and heads-up.
    High,
    /// Highest urgency.
    Max,
}

/// Android notification channel definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannel {
    /// Channel identifier.
    pub id: String,
    /// User-visible channel name.
    pub name: String,
    /// Channel importance.
    pub importance: ChannelImportance,
}

impl NotificationChannel {
    /// The `default` channel configured before requesting a token.
    pub fn default_channel() -> Self {
        Self {
            id: "default".to_owned(),
            name: "default".to_owned(),
            importance: ChannelImportance::Max,
        }
    }
}

/// Port over the platform notification service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlatformNotifications: Send + Sync {
    /// Platform this binding targets.
    fn platform(&self) -> Platform;

    /// Read the current permission state without prompting.
    async fn permission_status(&self) -> Result<PermissionStatus, TokenSourceError>;

    /// Show the OS permission prompt and return the answer.
    async fn request_permission(&self) -> Result<PermissionStatus, TokenSourceError>;

    /// Create or update a notification channel (Android only).
    async fn configure_channel(
        &self,
        channel: &NotificationChannel,
    ) -> Result<(), TokenSourceError>;

    /// Issue a raw push token.
    async fn issue_token(&self) -> Result<String, TokenSourceError>;
}
