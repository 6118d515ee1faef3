//! Local friend-request state.
//!
//! Every transition runs synchronously on local state; nothing here talks to
//! the backend. Allowed moves are `none → pending` (add),
//! `pending → none` (cancel), and `added → none` (unfriend, after
//! confirmation). There is no path from `pending` to `added` yet.

use tracing::debug;

use crate::domain::ports::{Confirmation, ConfirmationPrompt};

mod entry;
mod message;

pub use entry::{FriendAction, FriendEntry, FriendId, FriendStatus};
pub use message::{MessageDraft, QUICK_MESSAGES};

const SUGGESTED_FRIENDS: &str = include_str!("../../../fixtures/suggested_friends.json");

/// Errors raised by friend-list actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FriendError {
    /// No entry has the requested id.
    #[error("no friend entry with id '{id}'")]
    UnknownFriend {
        /// Requested id.
        id: FriendId,
    },
    /// The action is not allowed from the entry's current status.
    #[error("cannot {action} friend '{id}' while status is {status}")]
    InvalidTransition {
        /// Entry id.
        id: FriendId,
        /// Status at the time of the request.
        status: FriendStatus,
        /// Requested action.
        action: FriendAction,
    },
    /// The message draft resolved to blank text.
    #[error("message must not be empty")]
    EmptyMessage,
    /// The bundled seed data could not be decoded.
    #[error("invalid friend seed data: {message}")]
    Seed {
        /// Decoder message.
        message: String,
    },
}

/// Result of an unfriend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfriendOutcome {
    /// The user confirmed; the entry is back to `none`.
    Removed,
    /// The user declined; nothing changed.
    Kept,
}

/// Message delivered by [`FriendList::poke`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Recipient id.
    pub recipient: FriendId,
    /// Text sent.
    pub text: String,
    /// Whether this message set the poke flag.
    pub first_poke: bool,
}

/// Ordered collection of friend entries owned by one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendList {
    entries: Vec<FriendEntry>,
}

impl FriendList {
    /// Build a list from existing entries, keeping their order.
    pub fn from_entries(entries: Vec<FriendEntry>) -> Self {
        Self { entries }
    }

    /// Load the bundled "people you may know" suggestions.
    ///
    /// # Examples
    /// ```
    /// use notigasm_client::domain::FriendList;
    ///
    /// let list = FriendList::suggested().expect("seed data decodes");
    /// assert_eq!(list.entries().len(), 4);
    /// ```
    pub fn suggested() -> Result<Self, FriendError> {
        let entries: Vec<FriendEntry> =
            serde_json::from_str(SUGGESTED_FRIENDS).map_err(|error| FriendError::Seed {
                message: error.to_string(),
            })?;
        Ok(Self::from_entries(entries))
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[FriendEntry] {
        self.entries.as_slice()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &FriendId) -> Option<&FriendEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Entries whose name or handle contains `query`, ignoring case and a
    /// leading `@`. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&FriendEntry> {
        let needle = query.trim().trim_start_matches('@').to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| {
                entry.name.to_lowercase().contains(&needle)
                    || entry
                        .handle
                        .trim_start_matches('@')
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect()
    }

    /// Send a friend request (`none → pending`).
    pub fn add(&mut self, id: &FriendId) -> Result<&FriendEntry, FriendError> {
        self.transition(id, FriendAction::Add)
    }

    /// Withdraw a pending request (`pending → none`).
    pub fn cancel(&mut self, id: &FriendId) -> Result<&FriendEntry, FriendError> {
        self.transition(id, FriendAction::Cancel)
    }

    /// Remove a friend (`added → none`) once `prompt` confirms.
    ///
    /// The prompt is only shown for entries that are currently `added`.
    pub fn unfriend(
        &mut self,
        id: &FriendId,
        prompt: &dyn ConfirmationPrompt,
    ) -> Result<UnfriendOutcome, FriendError> {
        let entry = self.entry_mut(id)?;
        let next = checked_next(entry, FriendAction::Unfriend)?;
        match prompt.confirm_unfriend(entry) {
            Confirmation::Declined => {
                debug!(friend = %id, "unfriend declined");
                Ok(UnfriendOutcome::Kept)
            }
            Confirmation::Confirmed => {
                entry.status = next;
                debug!(friend = %id, status = %next, "friend status changed");
                Ok(UnfriendOutcome::Removed)
            }
        }
    }

    /// Send a direct message and set the poke flag.
    ///
    /// The flag only ever goes from `false` to `true`.
    pub fn poke(&mut self, id: &FriendId, draft: &MessageDraft) -> Result<SentMessage, FriendError> {
        let entry = self.entry_mut(id)?;
        let text = draft.resolve().ok_or(FriendError::EmptyMessage)?.to_owned();
        let first_poke = !entry.poked;
        entry.poked = true;
        Ok(SentMessage {
            recipient: entry.id.clone(),
            text,
            first_poke,
        })
    }

    fn transition(
        &mut self,
        id: &FriendId,
        action: FriendAction,
    ) -> Result<&FriendEntry, FriendError> {
        let entry = self.entry_mut(id)?;
        let next = checked_next(entry, action)?;
        entry.status = next;
        debug!(friend = %id, %action, status = %next, "friend status changed");
        Ok(entry)
    }

    fn entry_mut(&mut self, id: &FriendId) -> Result<&mut FriendEntry, FriendError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == *id)
            .ok_or_else(|| FriendError::UnknownFriend { id: id.clone() })
    }
}

fn checked_next(entry: &FriendEntry, action: FriendAction) -> Result<FriendStatus, FriendError> {
    entry
        .status
        .apply(action)
        .ok_or_else(|| FriendError::InvalidTransition {
            id: entry.id.clone(),
            status: entry.status,
            action,
        })
}
