//! Reqwest-backed backend client adapter.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping, and JSON decoding into domain payloads.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;

use super::dto::{RegisterTokenBody, StartStormBody, StopStormBody, storm_id_from};
use crate::domain::ports::{
    BackendApi, BackendApiError, OpaquePayload, StartStormRequest, StormId, StormStarted,
};
use crate::domain::{Handle, PushToken};

/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const JSON: &str = "application/json";
const NO_ERROR_DETAILS: &str = "No error details available";

/// Backend client issuing JSON requests against one base URL.
pub struct BackendHttpClient {
    client: Client,
    base: String,
}

impl BackendHttpClient {
    /// Build a client with an explicit request timeout.
    ///
    /// Trailing slashes on `base_url` are ignored.
    /// ```rust,ignore
    /// let client = BackendHttpClient::new(base_url, Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// Base URL requests are issued against, without a trailing slash.
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendApiError> {
        Url::parse(&format!("{}{path}", self.base))
            .map_err(|error| BackendApiError::invalid_request(format!("{path}: {error}")))
    }

    async fn get(&self, url: Url) -> Result<Value, BackendApiError> {
        self.execute(Method::GET, url, None).await
    }

    async fn post(&self, url: Url, body: &impl Serialize) -> Result<Value, BackendApiError> {
        let bytes = serde_json::to_vec(body).map_err(|error| {
            BackendApiError::invalid_request(format!("serialise request body: {error}"))
        })?;
        self.execute(Method::POST, url, Some(bytes)).await
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Value, BackendApiError> {
        debug!(%method, path = url.path(), "backend request");
        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON);
        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| NO_ERROR_DETAILS.to_owned());
            return Err(map_status_error(status, body));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        decode(body.as_ref())
    }
}

#[async_trait]
impl BackendApi for BackendHttpClient {
    async fn health(&self) -> Result<OpaquePayload, BackendApiError> {
        let url = self.endpoint("/health")?;
        self.get(url).await.map(OpaquePayload::new)
    }

    async fn register_token(
        &self,
        handle: &Handle,
        token: &PushToken,
    ) -> Result<OpaquePayload, BackendApiError> {
        let url = self.endpoint("/registerToken")?;
        let body = RegisterTokenBody {
            handle: handle.as_ref(),
            token: token.as_ref(),
        };
        self.post(url, &body).await.map(OpaquePayload::new)
    }

    async fn start_storm(
        &self,
        request: &StartStormRequest,
    ) -> Result<StormStarted, BackendApiError> {
        let url = self.endpoint("/storms/start")?;
        let payload = self.post(url, &StartStormBody::from(request)).await?;
        Ok(StormStarted {
            storm_id: storm_id_from(&payload),
            payload: OpaquePayload::new(payload),
        })
    }

    async fn stop_storm(&self, storm_id: StormId) -> Result<OpaquePayload, BackendApiError> {
        let url = self.endpoint("/storms/stop")?;
        let body = StopStormBody {
            storm_id: storm_id.0,
        };
        self.post(url, &body).await.map(OpaquePayload::new)
    }

    async fn list_storms(&self, handle: &Handle) -> Result<OpaquePayload, BackendApiError> {
        let mut url = self.endpoint("/storms")?;
        url.set_query(Some(&format!("handle={}", encode_component(handle.as_ref()))));
        self.get(url).await.map(OpaquePayload::new)
    }
}

/// Percent-encode a query value with `%20` for spaces.
///
/// Form encoding escapes a literal `+` as `%2B`, so every remaining `+` stands
/// for a space.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn decode(body: &[u8]) -> Result<Value, BackendApiError> {
    serde_json::from_slice(body)
        .map_err(|error| BackendApiError::decode(format!("invalid JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> BackendApiError {
    if error.is_timeout() {
        BackendApiError::timeout()
    } else {
        BackendApiError::network(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: String) -> BackendApiError {
    BackendApiError::http(
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        body,
    )
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")]
    #[case(StatusCode::NOT_FOUND, "Not Found")]
    #[case(StatusCode::TOO_MANY_REQUESTS, "Too Many Requests")]
    fn status_errors_keep_code_reason_and_body(#[case] status: StatusCode, #[case] reason: &str) {
        let error = map_status_error(status, "details".to_owned());
        assert_eq!(
            error,
            BackendApiError::Http {
                status: status.as_u16(),
                status_text: reason.to_owned(),
                body: "details".to_owned(),
            }
        );
    }

    #[test]
    fn non_json_success_body_is_a_decode_error() {
        let error = decode(b"<html>ok</html>").expect_err("html is not JSON");
        assert!(matches!(error, BackendApiError::Decode { .. }));
    }

    #[rstest]
    #[case::space("a b", "a%20b")]
    #[case::plus("a+b", "a%2Bb")]
    #[case::ampersand("x&y=z", "x%26y%3Dz")]
    #[case::plain("yash", "yash")]
    fn query_values_are_percent_encoded(#[case] raw: &str, #[case] encoded: &str) {
        assert_eq!(encode_component(raw), encoded);
    }

    #[test]
    fn trailing_slashes_are_stripped_from_the_base() {
        let base = Url::parse("https://api.example.test/v1///").expect("valid url");
        let client = BackendHttpClient::new(&base, DEFAULT_REQUEST_TIMEOUT).expect("client builds");

        assert_eq!(client.base(), "https://api.example.test/v1");
        assert_eq!(
            client.endpoint("/health").expect("endpoint").as_str(),
            "https://api.example.test/v1/health"
        );
    }
}
