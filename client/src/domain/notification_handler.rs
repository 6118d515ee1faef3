//! Foreground notification presentation policy.
//!
//! The policy is installed explicitly once during startup. Rules:
//! - installing into an empty registry stores the policy;
//! - installing the same policy again is a no-op;
//! - installing a different policy fails until [`NotificationHandlerRegistry::teardown`]
//!   clears the current one.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// How a notification received in the foreground is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPresentation {
    /// Show a banner.
    pub show_banner: bool,
    /// Keep the notification in the notification list.
    pub show_list: bool,
    /// Play the notification sound.
    pub play_sound: bool,
    /// Update the app badge.
    pub set_badge: bool,
}

impl Default for NotificationPresentation {
    fn default() -> Self {
        Self {
            show_banner: true,
            show_list: true,
            play_sound: false,
            set_badge: false,
        }
    }
}

/// Result of a successful install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerInstall {
    /// The policy is now active.
    Installed,
    /// An identical policy was already active.
    AlreadyInstalled,
}

/// Error returned when a different policy is already installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a different notification handler is already installed; tear it down first")]
pub struct HandlerConflict {
    /// Policy currently installed.
    pub installed: NotificationPresentation,
}

/// Holder for the installed presentation policy.
#[derive(Debug, Default)]
pub struct NotificationHandlerRegistry {
    installed: Mutex<Option<NotificationPresentation>>,
}

static PROCESS_REGISTRY: NotificationHandlerRegistry = NotificationHandlerRegistry::new();

impl NotificationHandlerRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            installed: Mutex::new(None),
        }
    }

    /// Registry shared by the whole process.
    pub fn process() -> &'static Self {
        &PROCESS_REGISTRY
    }

    /// Install `presentation`.
    ///
    /// # Examples
    /// ```
    /// use notigasm_client::domain::{
    ///     HandlerInstall, NotificationHandlerRegistry, NotificationPresentation,
    /// };
    ///
    /// let registry = NotificationHandlerRegistry::new();
    /// let policy = NotificationPresentation::default();
    /// assert_eq!(registry.install(policy), Ok(HandlerInstall::Installed));
    /// assert_eq!(registry.install(policy), Ok(HandlerInstall::AlreadyInstalled));
    /// ```
    pub fn install(
        &self,
        presentation: NotificationPresentation,
    ) -> Result<HandlerInstall, HandlerConflict> {
        let mut installed = self.lock();
        match *installed {
            None => {
                *installed = Some(presentation);
                Ok(HandlerInstall::Installed)
            }
            Some(current) if current == presentation => Ok(HandlerInstall::AlreadyInstalled),
            Some(current) => Err(HandlerConflict { installed: current }),
        }
    }

    /// Policy currently installed.
    pub fn current(&self) -> Option<NotificationPresentation> {
        *self.lock()
    }

    /// Clear the installed policy and return it.
    pub fn teardown(&self) -> Option<NotificationPresentation> {
        self.lock().take()
    }

    fn lock(&self) -> MutexGuard<'_, Option<NotificationPresentation>> {
        self.installed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noisy() -> NotificationPresentation {
        NotificationPresentation {
            play_sound: true,
            ..NotificationPresentation::default()
        }
    }

    #[test]
    fn starts_empty() {
        assert_eq!(NotificationHandlerRegistry::new().current(), None);
    }

    #[test]
    fn conflicting_install_is_rejected_and_keeps_the_installed_policy() {
        let registry = NotificationHandlerRegistry::new();
        registry
            .install(NotificationPresentation::default())
            .expect("first install");

        let err = registry.install(noisy()).expect_err("conflict");
        assert_eq!(err.installed, NotificationPresentation::default());
        assert_eq!(registry.current(), Some(NotificationPresentation::default()));
    }

    #[test]
    fn teardown_allows_a_new_policy() {
        let registry = NotificationHandlerRegistry::new();
        registry
            .install(NotificationPresentation::default())
            .expect("first install");

        assert_eq!(
            registry.teardown(),
            Some(NotificationPresentation::default())
        );
        assert_eq!(registry.install(noisy()), Ok(HandlerInstall::Installed));
        assert_eq!(registry.current(), Some(noisy()));
    }

    #[test]
    fn teardown_on_empty_registry_is_harmless() {
        assert_eq!(NotificationHandlerRegistry::new().teardown(), None);
    }
}
