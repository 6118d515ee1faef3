//! Driving-side prompt used to confirm destructive friend actions.

use crate::domain::FriendEntry;

/// Answer to a blocking confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The user accepted the action.
    Confirmed,
    /// The user dismissed the prompt.
    Declined,
}

/// Port asking the user to confirm an unfriend action.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationPrompt {
    /// Ask whether `entry` should be removed from the friend list.
    fn confirm_unfriend(&self, entry: &FriendEntry) -> Confirmation;
}

/// Prompt that always returns the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirmation(pub Confirmation);

impl ConfirmationPrompt for FixedConfirmation {
    fn confirm_unfriend(&self, _entry: &FriendEntry) -> Confirmation {
        self.0
    }
}
