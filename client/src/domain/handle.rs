//! Handle and push-token value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`Handle::new`] and [`PushToken::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierValidationError {
    /// The handle was empty or only whitespace.
    #[error("handle must not be empty")]
    EmptyHandle,
    /// The platform issued an empty token.
    #[error("push token must not be empty")]
    EmptyToken,
}

/// User-identifying string used as the registration key with the backend.
///
/// ## Invariants
/// - Never empty and never whitespace-only.
///
/// # Examples
/// ```
/// use notigasm_client::domain::Handle;
///
/// let handle = Handle::new("yash").expect("valid handle");
/// assert_eq!(handle.as_ref(), "yash");
/// assert!(Handle::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    /// Validate and construct a [`Handle`].
    pub fn new(handle: impl Into<String>) -> Result<Self, IdentifierValidationError> {
        Self::from_owned(handle.into())
    }

    fn from_owned(handle: String) -> Result<Self, IdentifierValidationError> {
        if handle.trim().is_empty() {
            return Err(IdentifierValidationError::EmptyHandle);
        }
        Ok(Self(handle))
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Handle> for String {
    fn from(value: Handle) -> Self {
        value.0
    }
}

impl TryFrom<String> for Handle {
    type Error = IdentifierValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Opaque identifier issued by the platform notification service.
///
/// Tokens are recreated on every registration attempt and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PushToken(String);

impl PushToken {
    /// Validate and construct a [`PushToken`].
    ///
    /// # Examples
    /// ```
    /// use notigasm_client::domain::PushToken;
    ///
    /// let token = PushToken::new("ExponentPushToken[abc]").expect("valid token");
    /// assert_eq!(token.as_ref(), "ExponentPushToken[abc]");
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self, IdentifierValidationError> {
        Self::from_owned(token.into())
    }

    fn from_owned(token: String) -> Result<Self, IdentifierValidationError> {
        if token.is_empty() {
            return Err(IdentifierValidationError::EmptyToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for PushToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PushToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PushToken> for String {
    fn from(value: PushToken) -> Self {
        value.0
    }
}

impl TryFrom<String> for PushToken {
    type Error = IdentifierValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
