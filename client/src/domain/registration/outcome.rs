//! Terminal results of a registration invocation.

use std::fmt;

use crate::domain::PushToken;
use crate::domain::ports::{BackendApiError, TokenSourceError};

/// Why a registration stopped before acquiring a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The platform cannot register for push notifications.
    PlatformUnsupported,
    /// No handle was supplied.
    NoHandle,
    /// Another registration for the same handle has not finished yet.
    AlreadyInFlight,
}

impl SkipReason {
    /// Stable snake_case label used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlatformUnsupported => "platform_unsupported",
            Self::NoHandle => "no_handle",
            Self::AlreadyInFlight => "already_in_flight",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure that ended a registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// No token could be obtained.
    #[error(transparent)]
    TokenSource(#[from] TokenSourceError),
    /// A token was obtained but the backend did not accept it.
    #[error("backend rejected push token registration: {source}")]
    Submission {
        /// Token that was acquired before submission failed.
        token: PushToken,
        /// Backend failure.
        source: BackendApiError,
    },
}

impl RegistrationError {
    /// Token acquired before the failure, if any.
    pub fn acquired_token(&self) -> Option<&PushToken> {
        match self {
            Self::TokenSource(_) => None,
            Self::Submission { token, .. } => Some(token),
        }
    }
}

/// Result of one registration invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The backend accepted the token.
    Registered(PushToken),
    /// Preconditions were not met; nothing was attempted.
    Skipped(SkipReason),
    /// A step failed; no retry is made.
    Failed(RegistrationError),
}

impl RegistrationOutcome {
    /// Return whether the token reached the backend.
    pub const fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }

    /// Stable label used in logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Registered(_) => "registered",
            Self::Skipped(_) => "skipped",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registered(token) => write!(f, "registered token {token}"),
            Self::Skipped(reason) => write!(f, "skipped: {reason}"),
            Self::Failed(error) => write!(f, "failed: {error}"),
        }
    }
}
