//! In-memory platform binding driven by configuration.
//!
//! Used by the CLI and by development builds that have no OS notification
//! service. The permission answer is memoised like a real platform does.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Platform;
use crate::domain::ports::{
    NotificationChannel, PermissionStatus, PlatformNotifications, TokenSourceError,
};

/// Platform binding returning a configured token.
#[derive(Debug)]
pub struct StaticPlatformNotifications {
    platform: Platform,
    token: Option<String>,
    prompt_answer: PermissionStatus,
    status: Mutex<PermissionStatus>,
    channels: Mutex<Vec<NotificationChannel>>,
}

impl StaticPlatformNotifications {
    /// Build a binding for `platform` issuing `token`.
    ///
    /// `initial` is the permission state before any prompt; `prompt_answer`
    /// is what the simulated user answers when prompted.
    pub fn new(
        platform: Platform,
        token: Option<String>,
        initial: PermissionStatus,
        prompt_answer: PermissionStatus,
    ) -> Self {
        Self {
            platform,
            token,
            prompt_answer,
            status: Mutex::new(initial),
            channels: Mutex::new(Vec::new()),
        }
    }

    /// Channels configured so far.
    pub fn channels(&self) -> Vec<NotificationChannel> {
        self.channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PlatformNotifications for StaticPlatformNotifications {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn permission_status(&self) -> Result<PermissionStatus, TokenSourceError> {
        Ok(*self.status.lock().unwrap_or_else(PoisonError::into_inner))
    }

    async fn request_permission(&self) -> Result<PermissionStatus, TokenSourceError> {
        let mut status = self.status.lock().unwrap_or_else(PoisonError::into_inner);
        if *status == PermissionStatus::Undetermined {
            debug!(answer = %self.prompt_answer, "simulated permission prompt");
            *status = self.prompt_answer;
        }
        Ok(*status)
    }

    async fn configure_channel(
        &self,
        channel: &NotificationChannel,
    ) -> Result<(), TokenSourceError> {
        let mut channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        channels.retain(|existing| existing.id != channel.id);
        channels.push(channel.clone());
        Ok(())
    }

    async fn issue_token(&self) -> Result<String, TokenSourceError> {
        self.token
            .clone()
            .ok_or_else(|| TokenSourceError::platform("no push token configured"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::NotificationProvider;
    use crate::outbound::notifications::PermissionGatedProvider;

    #[tokio::test]
    async fn prompt_answer_is_memoised() {
        let binding = StaticPlatformNotifications::new(
            Platform::Ios,
            Some("T".to_owned()),
            PermissionStatus::Undetermined,
            PermissionStatus::Denied,
        );

        assert_eq!(binding.request_permission().await, Ok(PermissionStatus::Denied));
        assert_eq!(binding.permission_status().await, Ok(PermissionStatus::Denied));
    }

    #[tokio::test]
    async fn missing_token_is_a_platform_error() {
        let binding = StaticPlatformNotifications::new(
            Platform::Android,
            None,
            PermissionStatus::Granted,
            PermissionStatus::Granted,
        );

        assert!(matches!(
            binding.issue_token().await,
            Err(TokenSourceError::Platform { .. })
        ));
    }

    #[tokio::test]
    async fn android_flow_configures_one_default_channel() {
        let binding = Arc::new(StaticPlatformNotifications::new(
            Platform::Android,
            Some("ExponentPushToken[android]".to_owned()),
            PermissionStatus::Undetermined,
            PermissionStatus::Granted,
        ));
        let provider = PermissionGatedProvider::new(Arc::clone(&binding) as _);

        provider.acquire_token().await.expect("first token");
        provider.acquire_token().await.expect("second token");

        assert_eq!(binding.channels(), vec![NotificationChannel::default_channel()]);
    }
}
