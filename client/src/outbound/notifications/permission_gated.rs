//! Token source that negotiates permission before requesting a token.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::PushToken;
use crate::domain::ports::{
    NotificationChannel, NotificationProvider, PermissionStatus, PlatformNotifications,
    TokenSourceError,
};

/// [`NotificationProvider`] built over a platform binding.
///
/// The OS prompt is shown only while permission is undetermined. Android
/// builds configure the default channel before a token is requested.
pub struct PermissionGatedProvider {
    platform: Arc<dyn PlatformNotifications>,
}

impl PermissionGatedProvider {
    /// Wrap a platform binding.
    pub fn new(platform: Arc<dyn PlatformNotifications>) -> Self {
        Self { platform }
    }

    async fn ensure_permission(&self) -> Result<(), TokenSourceError> {
        let status = match self.platform.permission_status().await? {
            PermissionStatus::Undetermined => {
                debug!("requesting notification permission");
                self.platform.request_permission().await?
            }
            settled => settled,
        };
        if status == PermissionStatus::Granted {
            Ok(())
        } else {
            Err(TokenSourceError::permission_denied())
        }
    }
}

#[async_trait]
impl NotificationProvider for PermissionGatedProvider {
    async fn acquire_token(&self) -> Result<PushToken, TokenSourceError> {
        let platform = self.platform.platform();
        if !platform.supports_push() {
            return Err(TokenSourceError::platform_unsupported());
        }
        self.ensure_permission().await?;
        if platform.requires_notification_channel() {
            self.platform
                .configure_channel(&NotificationChannel::default_channel())
                .await?;
        }

        let raw = self.platform.issue_token().await?;
        let token =
            PushToken::new(raw).map_err(|error| TokenSourceError::platform(error.to_string()))?;
        info!(%platform, "push token issued");
        Ok(token)
    }
}
