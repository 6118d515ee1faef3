//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod backend_api;
mod confirmation_prompt;
mod notification_provider;
mod platform_notifications;
mod registration_observer;

#[cfg(test)]
pub use backend_api::MockBackendApi;
pub use backend_api::{
    BackendApi, BackendApiError, InvalidStormOption, OpaquePayload, StartStormRequest,
    StormFrequency, StormId, StormMode, StormStarted,
};
#[cfg(test)]
pub use confirmation_prompt::MockConfirmationPrompt;
pub use confirmation_prompt::{Confirmation, ConfirmationPrompt, FixedConfirmation};
#[cfg(test)]
pub use notification_provider::MockNotificationProvider;
pub use notification_provider::{
    NotificationProvider, TokenSourceError, UnsupportedNotificationProvider,
};
#[cfg(test)]
pub use platform_notifications::MockPlatformNotifications;
pub use platform_notifications::{
    ChannelImportance, NotificationChannel, PermissionStatus, PlatformNotifications,
    UnknownPermissionStatus,
};
#[cfg(test)]
pub use registration_observer::MockRegistrationObserver;
pub use registration_observer::RegistrationObserver;
