//! Domain primitives, ports, and orchestration.
//!
//! Purpose: hold the client's transport-agnostic logic. Adapters live in
//! [`crate::outbound`] and are injected through [`ports`].
//!
//! Public surface:
//! - Handle, PushToken: validated identifiers.
//! - Platform: compile-time platform selection.
//! - RegistrationTask: push-token registration pipeline.
//! - FriendList: local friend-request state machine.
//! - NotificationHandlerRegistry: foreground presentation policy.

pub mod friends;
pub mod handle;
pub mod notification_handler;
pub mod platform;
pub mod ports;
pub mod registration;

pub use self::friends::{
    FriendAction, FriendEntry, FriendError, FriendId, FriendList, FriendStatus, MessageDraft,
    QUICK_MESSAGES, SentMessage, UnfriendOutcome,
};
pub use self::handle::{Handle, IdentifierValidationError, PushToken};
pub use self::notification_handler::{
    HandlerConflict, HandlerInstall, NotificationHandlerRegistry, NotificationPresentation,
};
pub use self::platform::{Platform, UnknownPlatform};
pub use self::registration::{
    RegistrationError, RegistrationOutcome, RegistrationPhase, RegistrationPorts,
    RegistrationTask, SkipReason,
};
