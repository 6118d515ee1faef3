//! Per-handle in-flight markers for registration deduplication.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::Handle;

/// Set of handles with a registration currently running.
#[derive(Debug, Default)]
pub(super) struct InFlightRegistrations {
    handles: Mutex<HashSet<Handle>>,
}

impl InFlightRegistrations {
    /// Claim `handle`, or return `None` when it is already claimed.
    pub(super) fn try_claim(&self, handle: &Handle) -> Option<InFlightClaim<'_>> {
        if !self.lock().insert(handle.clone()) {
            return None;
        }
        Some(InFlightClaim {
            registry: self,
            handle: handle.clone(),
        })
    }

    #[cfg(test)]
    pub(super) fn is_claimed(&self, handle: &Handle) -> bool {
        self.lock().contains(handle)
    }

    // The set holds no invariant a panicking holder could break.
    fn lock(&self) -> MutexGuard<'_, HashSet<Handle>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Claim released when dropped.
#[derive(Debug)]
pub(super) struct InFlightClaim<'a> {
    registry: &'a InFlightRegistrations,
    handle: Handle,
}

impl Drop for InFlightClaim<'_> {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(raw: &str) -> Handle {
        Handle::new(raw).expect("valid handle")
    }

    #[test]
    fn second_claim_for_same_handle_is_refused() {
        let registry = InFlightRegistrations::default();
        let first = registry.try_claim(&handle("yash"));
        assert!(first.is_some());
        assert!(registry.try_claim(&handle("yash")).is_none());
    }

    #[test]
    fn different_handles_do_not_conflict() {
        let registry = InFlightRegistrations::default();
        let _yash = registry.try_claim(&handle("yash")).expect("claim yash");
        assert!(registry.try_claim(&handle("emmaw")).is_some());
    }

    #[test]
    fn dropping_the_claim_releases_the_handle() {
        let registry = InFlightRegistrations::default();
        let claim = registry.try_claim(&handle("yash")).expect("claim");
        drop(claim);
        assert!(!registry.is_claimed(&handle("yash")));
        assert!(registry.try_claim(&handle("yash")).is_some());
    }
}
