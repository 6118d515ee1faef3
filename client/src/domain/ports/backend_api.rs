//! Driven port for the Notigasm backend REST API.
//!
//! The domain owns request shapes and the error taxonomy; adapters own the
//! wire format. Payloads the backend does not document are carried as opaque
//! JSON.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;
use crate::domain::{Handle, PushToken};

/// Opaque JSON payload returned by the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpaquePayload(Value);

impl OpaquePayload {
    /// Wrap a decoded JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value.
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for OpaquePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a running storm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StormId(pub i64);

impl fmt::Display for StormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How often a storm sends notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StormFrequency {
    /// Sparse notifications.
    Low,
    /// Moderate notifications.
    Med,
    /// Dense notifications.
    High,
}

impl StormFrequency {
    /// Wire name (`LOW`, `MED`, `HIGH`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Med => "MED",
            Self::High => "HIGH",
        }
    }
}

/// Source the backend draws storm message text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StormMode {
    /// Canned messages from a CSV corpus.
    Csv,
    /// Generated messages.
    Llm,
}

impl StormMode {
    /// Wire name (`csv`, `llm`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Llm => "llm",
        }
    }
}

/// Error returned when a storm option cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} '{value}'; expected one of {expected}")]
pub struct InvalidStormOption {
    field: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for StormFrequency {
    type Err = InvalidStormOption;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MED" => Ok(Self::Med),
            "HIGH" => Ok(Self::High),
            _ => Err(InvalidStormOption {
                field: "frequency",
                value: raw.to_owned(),
                expected: "LOW, MED, HIGH",
            }),
        }
    }
}

impl FromStr for StormMode {
    type Err = InvalidStormOption;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "llm" => Ok(Self::Llm),
            _ => Err(InvalidStormOption {
                field: "mode",
                value: raw.to_owned(),
                expected: "csv, llm",
            }),
        }
    }
}

/// Request to start a notification storm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartStormRequest {
    /// Handle of the user sending the storm.
    pub sender_handle: Handle,
    /// Handle of the user receiving the storm.
    pub target_handle: Handle,
    /// Notification frequency.
    pub frequency: StormFrequency,
    /// Optional storm duration in minutes.
    pub minutes: Option<u32>,
    /// Optional message source.
    pub mode: Option<StormMode>,
    /// Optional number of messages.
    pub count: Option<u32>,
    /// Optional free-text theme for generated messages.
    pub theme: Option<String>,
}

/// Acknowledgement for a started storm.
#[derive(Debug, Clone, PartialEq)]
pub struct StormStarted {
    /// Storm identifier when the backend reported one.
    pub storm_id: Option<StormId>,
    /// Raw acknowledgement payload.
    pub payload: OpaquePayload,
}

define_port_error! {
    /// Errors surfaced while calling the backend.
    pub enum BackendApiError {
        /// The backend answered with a non-success status.
        Http { status: u16, status_text: String, body: String } =>
            "{status} {status_text}: {body}",
        /// The request failed before a response arrived.
        Network { message: String } =>
            "network request failed: {message}",
        /// The request exceeded its timeout.
        Timeout =>
            "request timed out",
        /// The response body did not match the expected shape.
        Decode { message: String } =>
            "response decode failed: {message}",
        /// The request could not be built.
        InvalidRequest { message: String } =>
            "request invalid: {message}",
    }
}

impl BackendApiError {
    /// HTTP status for [`BackendApiError::Http`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for the backend REST operations.
///
/// No operation retries; callers own retry policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Fetch the backend health payload.
    async fn health(&self) -> Result<OpaquePayload, BackendApiError>;

    /// Register a device push token under a handle.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use notigasm_client::domain::{Handle, PushToken};
    ///
    /// let handle = Handle::new("yash")?;
    /// let token = PushToken::new("ExponentPushToken[abc]")?;
    /// let ack = api.register_token(&handle, &token).await?;
    /// println!("{ack}");
    /// ```
    async fn register_token(
        &self,
        handle: &Handle,
        token: &PushToken,
    ) -> Result<OpaquePayload, BackendApiError>;

    /// Start a notification storm.
    async fn start_storm(
        &self,
        request: &StartStormRequest,
    ) -> Result<StormStarted, BackendApiError>;

    /// Stop a running storm.
    async fn stop_storm(&self, storm_id: StormId) -> Result<OpaquePayload, BackendApiError>;

    /// List storms involving a handle.
    async fn list_storms(&self, handle: &Handle) -> Result<OpaquePayload, BackendApiError>;
}
