//! End-to-end push registration through the production wiring.

mod support;

use notigasm_client::composition::AppServices;
use notigasm_client::config::ClientSettings;
use notigasm_client::domain::{RegistrationError, RegistrationOutcome, SkipReason};
use notigasm_client::domain::ports::TokenSourceError;
use serde_json::json;
use support::{CannedResponse, serve_once};

fn android_settings(base: String) -> ClientSettings {
    ClientSettings {
        api_base: Some(base),
        platform: Some("android".to_owned()),
        push_token: Some("ExponentPushToken[abc]".to_owned()),
        ..ClientSettings::default()
    }
}

#[tokio::test]
async fn android_session_registers_the_configured_token() {
    let (base, server) = serve_once(CannedResponse::json(200, "OK", json!({"ok": true}))).await;
    let services = AppServices::from_settings(&android_settings(base)).expect("services");

    let session = services.session("yash");
    let outcome = session.ensure_push_registration().await;

    assert!(outcome.is_registered());
    let request = server.await.expect("server task");
    assert_eq!(
        request.json_body(),
        json!({"handle": "yash", "token": "ExponentPushToken[abc]"})
    );
}

#[tokio::test]
async fn denied_permission_fails_without_calling_the_backend() {
    let settings = ClientSettings {
        prompt_answer: Some("denied".to_owned()),
        ..android_settings("http://127.0.0.1:9".to_owned())
    };
    let services = AppServices::from_settings(&settings).expect("services");

    let outcome = services.session("yash").ensure_push_registration().await.clone();

    assert_eq!(
        outcome,
        RegistrationOutcome::Failed(RegistrationError::TokenSource(
            TokenSourceError::PermissionDenied
        ))
    );
}

#[tokio::test]
async fn blank_handle_is_skipped() {
    let services =
        AppServices::from_settings(&android_settings("http://127.0.0.1:9".to_owned()))
            .expect("services");

    let outcome = services.session("  ").ensure_push_registration().await.clone();

    assert_eq!(outcome, RegistrationOutcome::Skipped(SkipReason::NoHandle));
}
