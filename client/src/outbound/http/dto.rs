//! Wire DTOs for the backend REST API.
//!
//! Request bodies are camelCase JSON; absent optional fields are omitted.

use serde::Serialize;
use serde_json::Value;

use crate::domain::ports::{StartStormRequest, StormId};

#[derive(Debug, Serialize)]
pub(super) struct RegisterTokenBody<'a> {
    pub(super) handle: &'a str,
    pub(super) token: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StartStormBody<'a> {
    sender_handle: &'a str,
    target_handle: &'a str,
    frequency: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<&'a str>,
}

impl<'a> From<&'a StartStormRequest> for StartStormBody<'a> {
    fn from(request: &'a StartStormRequest) -> Self {
        Self {
            sender_handle: request.sender_handle.as_ref(),
            target_handle: request.target_handle.as_ref(),
            frequency: request.frequency.as_str(),
            minutes: request.minutes,
            mode: request.mode.map(|mode| mode.as_str()),
            count: request.count,
            theme: request.theme.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StopStormBody {
    pub(super) storm_id: i64,
}

/// Extract the storm id from a start acknowledgement (`stormId`, then `id`).
pub(super) fn storm_id_from(payload: &Value) -> Option<StormId> {
    ["stormId", "id"]
        .into_iter()
        .find_map(|key| payload.get(key).and_then(Value::as_i64))
        .map(StormId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Handle;
    use crate::domain::ports::{StormFrequency, StormMode};
    use serde_json::json;

    fn handle(raw: &str) -> Handle {
        Handle::new(raw).expect("valid handle")
    }

    #[test]
    fn start_storm_body_uses_camel_case_and_wire_names() {
        let request = StartStormRequest {
            sender_handle: handle("yash"),
            target_handle: handle("emmaw"),
            frequency: StormFrequency::Med,
            minutes: Some(1),
            mode: Some(StormMode::Csv),
            count: Some(5),
            theme: Some("funny, wholesome".to_owned()),
        };

        let body = serde_json::to_value(StartStormBody::from(&request)).expect("serialises");

        assert_eq!(
            body,
            json!({
                "senderHandle": "yash",
                "targetHandle": "emmaw",
                "frequency": "MED",
                "minutes": 1,
                "mode": "csv",
                "count": 5,
                "theme": "funny, wholesome",
            })
        );
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let request = StartStormRequest {
            sender_handle: handle("yash"),
            target_handle: handle("yash"),
            frequency: StormFrequency::High,
            minutes: None,
            mode: None,
            count: None,
            theme: None,
        };

        let body = serde_json::to_value(StartStormBody::from(&request)).expect("serialises");

        assert_eq!(
            body,
            json!({ "senderHandle": "yash", "targetHandle": "yash", "frequency": "HIGH" })
        );
    }

    #[test]
    fn storm_id_prefers_storm_id_field() {
        assert_eq!(
            storm_id_from(&json!({ "stormId": 7, "id": 3 })),
            Some(StormId(7))
        );
        assert_eq!(storm_id_from(&json!({ "id": 3 })), Some(StormId(3)));
        assert_eq!(storm_id_from(&json!({ "ok": true })), None);
        assert_eq!(storm_id_from(&json!({ "stormId": "seven" })), None);
    }
}
