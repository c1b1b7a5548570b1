//! Session lifecycle against a mocked WebDriver endpoint: setup registers
//! the session, teardown is idempotent, and the registry contract holds.

mod common;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use autotest_harness::{Config, Harness, init_test_logging};
use common::{MockDriverServer, SESSION_ID};

fn harness_for(mock: &MockDriverServer) -> Harness {
    let uri = mock.uri();
    let config = Config::from_pairs([
        ("platformName", "web"),
        ("browser", "chrome"),
        ("headless", "true"),
        ("selenium.server", uri.as_str()),
    ]);
    Harness::new(config)
}

#[tokio::test]
async fn setup_registers_session_and_teardown_unregisters() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    let harness = harness_for(&mock);

    assert!(!harness.registry().has_session());
    harness.setup().await.unwrap();
    assert!(harness.registry().has_session());

    harness.teardown().await;
    assert!(!harness.registry().has_session());
}

#[tokio::test]
async fn teardown_is_safe_to_repeat_and_without_setup() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    let harness = harness_for(&mock);

    // Never set up: nothing to do.
    harness.teardown().await;

    harness.setup().await.unwrap();
    harness.teardown().await;
    harness.teardown().await;
    assert!(!harness.registry().has_session());
}

#[tokio::test]
async fn registry_get_returns_none_when_empty_and_clone_when_set() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    let harness = harness_for(&mock);

    assert!(harness.registry().get().is_none());

    let session = harness.setup().await.unwrap();
    let fetched = harness.registry().get().expect("session should be registered");
    assert_eq!(fetched.platform(), session.platform());

    harness.registry().clear();
    assert!(harness.registry().get().is_none());

    // The remote session is still alive after a registry clear.
    session.quit().await.unwrap();
}

#[tokio::test]
async fn failed_app_clear_falls_back_to_relaunch() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_mobile_command("mobile: clearApp", false).await;
    for command in ["mobile: terminateApp", "mobile: activateApp"] {
        Mock::given(method("POST"))
            .and(path(format!("/session/{SESSION_ID}/execute/sync")))
            .and(body_partial_json(json!({ "script": command })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": null })))
            .expect(1)
            .mount(mock.server())
            .await;
    }

    let uri = mock.uri();
    let config = Config::from_pairs([
        ("platformName", "Android"),
        ("appium.server", uri.as_str()),
        ("app.package", "com.example.demo"),
    ]);
    let harness = Harness::new(config);
    harness.setup().await.unwrap();

    // A reset must survive a failing clearApp; the server verifies that
    // terminate and activate each ran exactly once.
    harness.reset_between_tests().await;

    harness.teardown().await;
}

#[tokio::test]
async fn setup_fails_fast_against_unreachable_endpoint() {
    init_test_logging();
    let config = Config::from_pairs([
        ("platformName", "web"),
        ("selenium.server", "http://127.0.0.1:1"),
    ]);
    let harness = Harness::new(config);

    let err = harness.setup().await.unwrap_err();
    assert!(err.to_string().contains("failed to create session"));
    assert!(!harness.registry().has_session());
}

#[tokio::test]
async fn unknown_platform_is_rejected() {
    init_test_logging();
    let config = Config::from_pairs([("platformName", "blackberry")]);
    let harness = Harness::new(config);

    let err = harness.setup().await.unwrap_err();
    assert!(err.to_string().contains("blackberry"));
}
