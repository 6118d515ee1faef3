//! Notigasm client core.
//!
//! Registers the device push token for the signed-in handle, talks to the
//! Notigasm HTTP API, and tracks friend-request state for the friends screen.

pub mod composition;
pub mod config;
pub mod domain;
pub mod outbound;

#[cfg(test)]
mod test_support;
