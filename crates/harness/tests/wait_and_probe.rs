//! Wait bounds, probe semantics and assertion messages against a mocked
//! WebDriver endpoint.

mod common;

use std::time::{Duration, Instant};

use thirtyfour::By;

use autotest_harness::{Actions, Locator, Platform, Validations, init_test_logging};
use common::{MockDriverServer, MockElement};

#[tokio::test]
async fn probe_returns_false_without_hanging_when_element_missing() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_missing_element("#ghost").await;
    let session = mock.session(Platform::Web).await;
    let validations = Validations::new(&session);
    let ghost = Locator::web("Ghost panel", By::Css("#ghost"));

    let started = Instant::now();
    assert!(!validations.is_displayed(&ghost).await);
    assert!(!validations.is_enabled(&ghost).await);
    // Zero-bound probes are a single immediate check, not a full wait.
    assert!(started.elapsed() < Duration::from_secs(3));

    session.quit().await.unwrap();
}

#[tokio::test]
async fn probe_returns_true_for_displayed_element() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_element("#banner", "elem-banner", MockElement::default())
        .await;
    let session = mock.session(Platform::Web).await;
    let validations = Validations::new(&session);
    let banner = Locator::web("Banner", By::Css("#banner"));

    assert!(validations.is_displayed(&banner).await);
    assert!(validations.is_enabled(&banner).await);
    assert!(!validations.is_selected(&banner).await);

    session.quit().await.unwrap();
}

#[tokio::test]
async fn hidden_but_enabled_element_reports_enabled() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_element(
        "#offscreen",
        "elem-offscreen",
        MockElement {
            displayed: false,
            ..MockElement::default()
        },
    )
    .await;
    let session = mock.session(Platform::Web).await;
    let validations = Validations::new(&session);
    let offscreen = Locator::web("Offscreen toggle", By::Css("#offscreen"));

    // Enabled is a property of the control itself, not of its visibility.
    assert!(!validations.is_displayed(&offscreen).await);
    assert!(validations.is_enabled(&offscreen).await);

    session.quit().await.unwrap();
}

#[tokio::test]
async fn wait_timeout_names_element_and_state() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_missing_element("#slow").await;
    let session = mock.session(Platform::Web).await;
    let actions = Actions::new(&session);
    let slow = Locator::web("Submit button", By::Css("#slow"));

    let err = actions
        .click_within(&slow, Duration::from_millis(300))
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    let message = err.to_string();
    assert!(message.contains("Submit button"), "{message}");
    assert!(message.contains("clickable"), "{message}");
    assert!(message.contains("300ms"), "{message}");

    session.quit().await.unwrap();
}

#[tokio::test]
async fn hidden_element_fails_clickable_wait_but_passes_invisible_wait() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_element(
        "#spinner",
        "elem-spinner",
        MockElement {
            displayed: false,
            ..MockElement::default()
        },
    )
    .await;
    let session = mock.session(Platform::Web).await;
    let actions = Actions::new(&session);
    let spinner = Locator::web("Loading spinner", By::Css("#spinner"));

    let err = actions
        .wait_clickable(&spinner, Duration::from_millis(300))
        .await
        .unwrap_err();
    assert!(err.is_timeout());

    actions
        .wait_invisible(&spinner, Duration::from_millis(300))
        .await
        .unwrap();

    session.quit().await.unwrap();
}

#[tokio::test]
async fn displayed_validation_on_hidden_element_names_it() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_element(
        "#toast",
        "elem-toast",
        MockElement {
            displayed: false,
            ..MockElement::default()
        },
    )
    .await;
    let session = mock.session(Platform::Web).await;
    let validations = Validations::new(&session);
    let toast = Locator::web("Success toast", By::Css("#toast"));

    // Runs out the full default wait before failing.
    let err = validations.validate_displayed(&toast).await.unwrap_err();
    assert!(err.is_assertion());
    let message = err.to_string();
    assert!(message.contains("'Success toast' should be displayed"), "{message}");

    session.quit().await.unwrap();
}

#[tokio::test]
async fn text_mismatch_reports_expected_and_actual() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_element(
        "#total",
        "elem-total",
        MockElement {
            text: "$29.99",
            ..MockElement::default()
        },
    )
    .await;
    let session = mock.session(Platform::Web).await;
    let validations = Validations::new(&session);
    let total = Locator::web("Total price", By::Css("#total"));

    let err = validations
        .validate_text_equals(&total, "$39.98")
        .await
        .unwrap_err();
    assert!(err.is_assertion());
    let message = err.to_string();
    assert!(message.contains("Total price"), "{message}");
    assert!(message.contains("Expected: '$39.98'"), "{message}");
    assert!(message.contains("Actual: '$29.99'"), "{message}");

    session.quit().await.unwrap();
}

#[tokio::test]
async fn disabled_element_fails_enabled_validation() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_element(
        "#pay",
        "elem-pay",
        MockElement {
            enabled: false,
            ..MockElement::default()
        },
    )
    .await;
    let session = mock.session(Platform::Web).await;
    let validations = Validations::new(&session);
    let pay = Locator::web("Pay button", By::Css("#pay"));

    let err = validations.validate_enabled(&pay).await.unwrap_err();
    assert!(err.is_assertion());
    assert!(err.to_string().contains("should be enabled"));
    validations.validate_disabled(&pay).await.unwrap();

    session.quit().await.unwrap();
}

#[tokio::test]
async fn click_and_type_succeed_on_ready_element() {
    init_test_logging();
    let mock = MockDriverServer::start().await;
    mock.mount_element("#username", "elem-user", MockElement::default())
        .await;
    let session = mock.session(Platform::Web).await;
    let actions = Actions::new(&session);
    let username = Locator::web("Username field", By::Css("#username"));

    actions.click(&username).await.unwrap();
    actions.type_text(&username, "bob@example.com").await.unwrap();

    session.quit().await.unwrap();
}
