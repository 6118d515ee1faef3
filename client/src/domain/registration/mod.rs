//! Push-token registration orchestration.
//!
//! One invocation walks `Idle → Checking → Acquiring → Submitting → Done`,
//! strictly in order, and reports its terminal outcome to the observer port
//! exactly once. Nothing is cached between invocations; only concurrent
//! invocations for the same handle are deduplicated.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{BackendApi, NotificationProvider, RegistrationObserver};
use crate::domain::{Handle, Platform};

mod in_flight;
mod outcome;

use in_flight::InFlightRegistrations;
pub use outcome::{RegistrationError, RegistrationOutcome, SkipReason};

/// Phase of a registration invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationPhase {
    /// Not started.
    Idle,
    /// Checking platform support and preconditions.
    Checking,
    /// Waiting on the token source.
    Acquiring,
    /// Waiting on the backend.
    Submitting,
    /// Terminal outcome produced.
    Done,
}

impl fmt::Display for RegistrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Checking => "checking",
            Self::Acquiring => "acquiring",
            Self::Submitting => "submitting",
            Self::Done => "done",
        })
    }
}

/// Port bundle required by the registration task.
pub struct RegistrationPorts {
    /// Token source.
    pub provider: Arc<dyn NotificationProvider>,
    /// Backend client.
    pub backend: Arc<dyn BackendApi>,
    /// Outcome sink.
    pub observer: Arc<dyn RegistrationObserver>,
}

impl RegistrationPorts {
    /// Build a strongly-typed port bundle.
    pub fn new(
        provider: Arc<dyn NotificationProvider>,
        backend: Arc<dyn BackendApi>,
        observer: Arc<dyn RegistrationObserver>,
    ) -> Self {
        Self {
            provider,
            backend,
            observer,
        }
    }
}

/// Registers the device push token for a handle with the backend.
pub struct RegistrationTask {
    platform: Platform,
    provider: Arc<dyn NotificationProvider>,
    backend: Arc<dyn BackendApi>,
    observer: Arc<dyn RegistrationObserver>,
    in_flight: InFlightRegistrations,
}

impl RegistrationTask {
    /// Build a task for `platform`.
    /// ```rust,ignore
    /// let task = RegistrationTask::new(Platform::current(), ports);
    /// ```
    pub fn new(platform: Platform, ports: RegistrationPorts) -> Self {
        Self {
            platform,
            provider: ports.provider,
            backend: ports.backend,
            observer: ports.observer,
            in_flight: InFlightRegistrations::default(),
        }
    }

    /// Platform the task checks support for.
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Run one registration for the raw `handle` and report its outcome.
    ///
    /// Errors never escape: every failure becomes
    /// [`RegistrationOutcome::Failed`].
    /// ```rust,ignore
    /// let outcome = task.run("yash").await;
    /// assert!(outcome.is_registered());
    /// ```
    pub async fn run(&self, handle: &str) -> RegistrationOutcome {
        trace_phase(handle, RegistrationPhase::Idle);
        let outcome = self.execute(handle).await;
        trace_phase(handle, RegistrationPhase::Done);
        self.observer.report(handle, &outcome);
        outcome
    }

    async fn execute(&self, raw_handle: &str) -> RegistrationOutcome {
        trace_phase(raw_handle, RegistrationPhase::Checking);
        if !self.platform.supports_push() {
            return RegistrationOutcome::Skipped(SkipReason::PlatformUnsupported);
        }
        let Ok(handle) = Handle::new(raw_handle) else {
            return RegistrationOutcome::Skipped(SkipReason::NoHandle);
        };
        let Some(_claim) = self.in_flight.try_claim(&handle) else {
            return RegistrationOutcome::Skipped(SkipReason::AlreadyInFlight);
        };

        trace_phase(raw_handle, RegistrationPhase::Acquiring);
        let token = match self.provider.acquire_token().await {
            Ok(token) => token,
            Err(error) => return RegistrationOutcome::Failed(error.into()),
        };

        trace_phase(raw_handle, RegistrationPhase::Submitting);
        match self.backend.register_token(&handle, &token).await {
            Ok(_ack) => RegistrationOutcome::Registered(token),
            Err(source) => {
                RegistrationOutcome::Failed(RegistrationError::Submission { token, source })
            }
        }
    }
}

fn trace_phase(handle: &str, phase: RegistrationPhase) {
    debug!(handle, %phase, "push registration phase");
}
