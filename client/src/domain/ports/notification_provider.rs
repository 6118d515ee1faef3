//! Driven port for obtaining a push token from the platform.
//!
//! The registration task only sees this narrow capability; how permission is
//! negotiated and which OS binding issues the token stay behind it.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::PushToken;

define_port_error! {
    /// Errors surfaced while acquiring a push token.
    pub enum TokenSourceError {
        /// The running platform cannot register for push notifications.
        PlatformUnsupported =>
            "push notifications are not supported on this platform",
        /// The user declined the notification permission prompt.
        PermissionDenied =>
            "notifications permission not granted",
        /// The underlying platform API failed.
        Platform { message: String } =>
            "platform notification service failed: {message}",
    }
}

/// Port yielding an opaque push-registration identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Obtain a push token, prompting for permission at most once.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use notigasm_client::domain::ports::NotificationProvider;
    ///
    /// let token = provider.acquire_token().await?;
    /// println!("registered device token {token}");
    /// # Ok::<(), notigasm_client::domain::ports::TokenSourceError>(())
    /// ```
    async fn acquire_token(&self) -> Result<PushToken, TokenSourceError>;
}

/// Provider used on platforms without push support.
///
/// It never touches the OS and always fails with
/// [`TokenSourceError::PlatformUnsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedNotificationProvider;

#[async_trait]
impl NotificationProvider for UnsupportedNotificationProvider {
    async fn acquire_token(&self) -> Result<PushToken, TokenSourceError> {
        Err(TokenSourceError::platform_unsupported())
    }
}
