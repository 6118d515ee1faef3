//! Driven port receiving terminal registration outcomes.

use crate::domain::RegistrationOutcome;

/// Sink for registration outcomes (logging, telemetry).
///
/// Called exactly once per registration invocation.
#[cfg_attr(test, mockall::automock)]
pub trait RegistrationObserver: Send + Sync {
    /// Record the outcome for the raw handle the task was invoked with.
    fn report(&self, handle: &str, outcome: &RegistrationOutcome);
}

