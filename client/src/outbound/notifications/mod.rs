//! Notification outbound adapters.
//!
//! [`PermissionGatedProvider`] implements the `NotificationProvider` port over
//! any `PlatformNotifications` binding; [`StaticPlatformNotifications`] is the
//! configuration-driven binding used outside a mobile OS.

mod permission_gated;
mod static_platform;

pub use permission_gated::PermissionGatedProvider;
pub use static_platform::StaticPlatformNotifications;
