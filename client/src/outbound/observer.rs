//! Tracing-backed registration observer.

use tracing::{error, info, warn};

use crate::domain::RegistrationOutcome;
use crate::domain::ports::RegistrationObserver;

/// Logs each registration outcome as a structured event.
///
/// Successes log at `info`, skips at `warn`, failures at `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRegistrationObserver;

impl RegistrationObserver for TracingRegistrationObserver {
    fn report(&self, handle: &str, outcome: &RegistrationOutcome) {
        match outcome {
            RegistrationOutcome::Registered(token) => {
                info!(handle, %token, "push token registered");
            }
            RegistrationOutcome::Skipped(reason) => {
                warn!(handle, %reason, "push token registration skipped");
            }
            RegistrationOutcome::Failed(failure) => {
                error!(
                    handle,
                    error = %failure,
                    token_acquired = failure.acquired_token().is_some(),
                    "failed to register push token"
                );
            }
        }
    }
}
