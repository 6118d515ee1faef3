//! Shared test doubles for unit tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::RegistrationOutcome;
use crate::domain::ports::RegistrationObserver;

/// Observer recording every reported outcome in order.
#[derive(Default)]
pub struct RecordingObserver(Mutex<Vec<(String, RegistrationOutcome)>>);

impl RecordingObserver {
    pub fn reports(&self) -> Vec<(String, RegistrationOutcome)> {
        self.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(String, RegistrationOutcome)>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RegistrationObserver for RecordingObserver {
    fn report(&self, handle: &str, outcome: &RegistrationOutcome) {
        self.lock().push((handle.to_owned(), outcome.clone()));
    }
}
