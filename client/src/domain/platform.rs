//! Runtime platform identification.
//!
//! The platform is fixed at compile time from the target; configuration may
//! override it for development builds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platform the client is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android devices.
    Android,
    /// iOS devices.
    Ios,
    /// Browser builds.
    Web,
    /// Desktop builds used for development tooling.
    Desktop,
}

impl Platform {
    /// Return the platform selected by the compilation target.
    ///
    /// # Examples
    /// ```
    /// use notigasm_client::domain::Platform;
    ///
    /// let platform = Platform::current();
    /// # #[cfg(target_os = "linux")]
    /// assert_eq!(platform, Platform::Desktop);
    /// ```
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_family = "wasm") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Return whether push registration is available on this platform.
    #[must_use]
    pub const fn supports_push(self) -> bool {
        matches!(self, Self::Android | Self::Ios)
    }

    /// Return whether a notification channel must be configured before
    /// requesting a token.
    #[must_use]
    pub const fn requires_notification_channel(self) -> bool {
        matches!(self, Self::Android)
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a platform name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform '{0}'; expected android, ios, web, or desktop")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "web" => Ok(Self::Web),
            "desktop" => Ok(Self::Desktop),
            _ => Err(UnknownPlatform(raw.to_owned())),
        }
    }
}
