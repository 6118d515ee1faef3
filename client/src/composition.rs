//! Composition root wiring adapters into domain services.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use crate::config::{ClientSettings, SettingsError};
use crate::domain::ports::{BackendApi, NotificationProvider, UnsupportedNotificationProvider};
use crate::domain::{
    HandlerConflict, NotificationHandlerRegistry, NotificationPresentation, RegistrationOutcome,
    RegistrationPorts, RegistrationTask,
};
use crate::outbound::http::BackendHttpClient;
use crate::outbound::notifications::{PermissionGatedProvider, StaticPlatformNotifications};
use crate::outbound::observer::TracingRegistrationObserver;

/// Errors raised while assembling the client services.
#[derive(Debug, thiserror::Error)]
pub enum CompositionError {
    /// Settings failed validation.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    /// A different notification handler is active.
    #[error(transparent)]
    Handler(#[from] HandlerConflict),
}

/// Long-lived services shared by every session.
pub struct AppServices {
    backend: Arc<dyn BackendApi>,
    registration: Arc<RegistrationTask>,
}

impl AppServices {
    /// Assemble services from explicit parts.
    pub fn new(backend: Arc<dyn BackendApi>, registration: RegistrationTask) -> Self {
        Self {
            backend,
            registration: Arc::new(registration),
        }
    }

    /// Build the production wiring described by `settings`.
    ///
    /// Installs the default foreground notification policy in the process
    /// registry; an identical policy already being active is not an error.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, CompositionError> {
        let base = settings.api_base()?;
        let timeout = settings.request_timeout()?;
        let platform = settings.platform()?;

        let backend: Arc<dyn BackendApi> = Arc::new(BackendHttpClient::new(&base, timeout)?);
        let provider: Arc<dyn NotificationProvider> = if platform.supports_push() {
            let binding = StaticPlatformNotifications::new(
                platform,
                settings.push_token().map(str::to_owned),
                settings.permission()?,
                settings.prompt_answer()?,
            );
            Arc::new(PermissionGatedProvider::new(Arc::new(binding)))
        } else {
            Arc::new(UnsupportedNotificationProvider)
        };

        let install =
            NotificationHandlerRegistry::process().install(NotificationPresentation::default())?;
        info!(%platform, api_base = %base, ?install, "client services ready");

        let registration = RegistrationTask::new(
            platform,
            RegistrationPorts::new(
                provider,
                Arc::clone(&backend),
                Arc::new(TracingRegistrationObserver),
            ),
        );
        Ok(Self::new(backend, registration))
    }

    /// Backend client shared by all sessions.
    pub fn backend(&self) -> &Arc<dyn BackendApi> {
        &self.backend
    }

    /// Registration task shared by all sessions.
    pub fn registration(&self) -> &RegistrationTask {
        &self.registration
    }

    /// Start a session for the signed-in `handle`.
    pub fn session(&self, handle: impl Into<String>) -> AppSession {
        AppSession {
            registration: Arc::clone(&self.registration),
            handle: handle.into(),
            push: OnceCell::new(),
        }
    }
}

/// One signed-in session.
///
/// Push registration runs at most once per session; later calls return the
/// stored outcome. Start a new session to retry.
pub struct AppSession {
    registration: Arc<RegistrationTask>,
    handle: String,
    push: OnceCell<RegistrationOutcome>,
}

impl AppSession {
    /// Handle this session was started for.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Register the push token for this session's handle once.
    pub async fn ensure_push_registration(&self) -> &RegistrationOutcome {
        self.push
            .get_or_init(|| self.registration.run(&self.handle))
            .await
    }

    /// Outcome of the session's registration, if it has run.
    pub fn push_outcome(&self) -> Option<&RegistrationOutcome> {
        self.push.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        BackendApiError, MockBackendApi, MockNotificationProvider, OpaquePayload,
    };
    use crate::domain::{Platform, PushToken, RegistrationError, SkipReason};
    use crate::test_support::RecordingObserver;
    use rstest::rstest;

    fn services(
        provider: MockNotificationProvider,
        backend: MockBackendApi,
        observer: Arc<RecordingObserver>,
    ) -> AppServices {
        let backend: Arc<dyn BackendApi> = Arc::new(backend);
        let task = RegistrationTask::new(
            Platform::Ios,
            RegistrationPorts::new(Arc::new(provider), Arc::clone(&backend), observer),
        );
        AppServices::new(backend, task)
    }

    #[tokio::test]
    async fn session_registers_once_and_caches_the_outcome() {
        let mut provider = MockNotificationProvider::new();
        provider
            .expect_acquire_token()
            .times(1)
            .returning(|| Ok(PushToken::new("T").expect("token")));
        let mut backend = MockBackendApi::new();
        backend
            .expect_register_token()
            .times(1)
            .returning(|_, _| Ok(OpaquePayload::default()));
        let observer = Arc::new(RecordingObserver::default());

        let services = services(provider, backend, Arc::clone(&observer));
        let session = services.session("yash");
        assert!(session.push_outcome().is_none());

        let first = session.ensure_push_registration().await.clone();
        let second = session.ensure_push_registration().await;

        assert!(first.is_registered());
        assert_eq!(&first, second);
        assert_eq!(observer.count(), 1);
    }

    #[tokio::test]
    async fn a_new_session_retries_after_failure() {
        let mut provider = MockNotificationProvider::new();
        provider
            .expect_acquire_token()
            .times(2)
            .returning(|| Ok(PushToken::new("T").expect("token")));
        let mut backend = MockBackendApi::new();
        backend
            .expect_register_token()
            .times(2)
            .returning(|_, _| Err(BackendApiError::http(503_u16, "Service Unavailable", "down")));
        let observer = Arc::new(RecordingObserver::default());

        let services = services(provider, backend, Arc::clone(&observer));
        for _ in 0..2 {
            let session = services.session("yash");
            let outcome = session.ensure_push_registration().await;
            assert!(matches!(
                outcome,
                RegistrationOutcome::Failed(RegistrationError::Submission { .. })
            ));
        }
        assert_eq!(observer.count(), 2);
    }

    #[rstest]
    #[case::web("web", Platform::Web)]
    #[case::desktop("desktop", Platform::Desktop)]
    #[tokio::test]
    async fn settings_for_non_push_platforms_skip_registration(
        #[case] raw: &str,
        #[case] platform: Platform,
    ) {
        let settings = ClientSettings {
            api_base: Some("http://127.0.0.1:9".to_owned()),
            platform: Some(raw.to_owned()),
            ..ClientSettings::default()
        };

        let services = AppServices::from_settings(&settings).expect("services build");
        assert_eq!(services.registration().platform(), platform);
        let session = services.session("yash");

        assert_eq!(
            session.ensure_push_registration().await,
            &RegistrationOutcome::Skipped(SkipReason::PlatformUnsupported)
        );
        assert_eq!(
            NotificationHandlerRegistry::process().current(),
            Some(NotificationPresentation::default())
        );
    }

    #[rstest]
    fn invalid_settings_are_reported() {
        let settings = ClientSettings {
            request_timeout_ms: 0,
            ..ClientSettings::default()
        };

        assert!(matches!(
            AppServices::from_settings(&settings),
            Err(CompositionError::Settings(SettingsError::ZeroTimeout))
        ));
    }
}
