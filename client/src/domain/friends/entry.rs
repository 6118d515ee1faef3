//! Friend entries and their request status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque friend identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for FriendId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Friend-request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FriendStatus {
    /// No request exists.
    #[serde(rename = "none")]
    NotFriends,
    /// A request was sent and not answered.
    #[serde(rename = "pending")]
    Pending,
    /// The two users are connected.
    #[serde(rename = "added")]
    Added,
}

impl FriendStatus {
    /// Status reached by applying `action`, or `None` when the transition is
    /// not allowed.
    ///
    /// # Examples
    /// ```
    /// use notigasm_client::domain::{FriendAction, FriendStatus};
    ///
    /// assert_eq!(
    ///     FriendStatus::NotFriends.apply(FriendAction::Add),
    ///     Some(FriendStatus::Pending)
    /// );
    /// assert_eq!(FriendStatus::Pending.apply(FriendAction::Unfriend), None);
    /// ```
    pub const fn apply(self, action: FriendAction) -> Option<Self> {
        match (self, action) {
            (Self::NotFriends, FriendAction::Add) => Some(Self::Pending),
            (Self::Pending, FriendAction::Cancel) => Some(Self::NotFriends),
            (Self::Added, FriendAction::Unfriend) => Some(Self::NotFriends),
            _ => None,
        }
    }

    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFriends => "none",
            Self::Pending => "pending",
            Self::Added => "added",
        }
    }
}

impl fmt::Display for FriendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status-changing action on a friend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendAction {
    /// Send a friend request.
    Add,
    /// Withdraw a pending request.
    Cancel,
    /// Remove an existing friend.
    Unfriend,
}

impl fmt::Display for FriendAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Cancel => "cancel",
            Self::Unfriend => "unfriend",
        })
    }
}

/// One discoverable or connected person.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendEntry {
    pub(super) id: FriendId,
    pub(super) name: String,
    #[serde(rename = "username")]
    pub(super) handle: String,
    pub(super) mutual_friends: u32,
    #[serde(rename = "isOnline")]
    pub(super) online: bool,
    pub(super) status: FriendStatus,
    #[serde(default)]
    pub(super) poked: bool,
}

impl FriendEntry {
    /// Build an entry with no request and no poke.
    pub fn new(
        id: FriendId,
        name: impl Into<String>,
        handle: impl Into<String>,
        mutual_friends: u32,
        online: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            handle: handle.into(),
            mutual_friends,
            online,
            status: FriendStatus::NotFriends,
            poked: false,
        }
    }

    /// Return a copy with `status`, used when seeding existing relationships.
    #[must_use]
    pub fn with_status(mut self, status: FriendStatus) -> Self {
        self.status = status;
        self
    }

    /// Identifier.
    pub fn id(&self) -> &FriendId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Public handle, usually prefixed with `@`.
    pub fn handle(&self) -> &str {
        self.handle.as_str()
    }

    /// Number of shared connections.
    pub const fn mutual_friends(&self) -> u32 {
        self.mutual_friends
    }

    /// Whether the person is currently online.
    pub const fn is_online(&self) -> bool {
        self.online
    }

    /// Current request status.
    pub const fn status(&self) -> FriendStatus {
        self.status
    }

    /// Whether a direct message has been sent to this person.
    pub const fn is_poked(&self) -> bool {
        self.poked
    }
}
