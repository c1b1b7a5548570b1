//! Mock W3C WebDriver endpoint built on wiremock.
//!
//! Serves just enough of the wire protocol to create a session, look up
//! elements and read their state, so session/action/validation behavior
//! can be exercised without a real browser.

// Not every test binary uses every helper.
#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use autotest_harness::{Platform, Session};
use thirtyfour::WebDriver;

pub const SESSION_ID: &str = "itest-session";

pub struct MockDriverServer {
    server: MockServer,
}

impl MockDriverServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": { "sessionId": SESSION_ID, "capabilities": {} }
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(format!("/session/{SESSION_ID}/timeouts")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": null })))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path(format!("/session/{SESSION_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": null })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(format!("/session/{SESSION_ID}/window/maximize")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": { "x": 0, "y": 0, "width": 1920, "height": 1080 }
            })))
            .mount(&server)
            .await;

        MockDriverServer { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Connects a real driver to the mock endpoint.
    pub async fn session(&self, platform: Platform) -> Session {
        let caps = json!({ "browserName": "chrome" })
            .as_object()
            .cloned()
            .unwrap();
        let driver = WebDriver::new(&self.uri(), caps)
            .await
            .expect("mock session should start");
        Session::new(driver, platform)
    }

    /// Element lookups for this CSS selector answer "no such element".
    pub async fn mount_missing_element(&self, css: &str) {
        let body = json!({ "using": "css selector", "value": css });
        let not_found = ResponseTemplate::new(404).set_body_json(json!({
            "value": {
                "error": "no such element",
                "message": "Unable to locate element",
                "stacktrace": ""
            }
        }));
        Mock::given(method("POST"))
            .and(path(format!("/session/{SESSION_ID}/element")))
            .and(body_json(body))
            .respond_with(not_found)
            .mount(&self.server)
            .await;
    }

    /// Element lookups for this CSS selector resolve to `element_id`, with
    /// fixed state and text answers.
    pub async fn mount_element(&self, css: &str, element_id: &str, state: MockElement) {
        let found = json!({
            "value": { "element-6066-11e4-a52e-4f735466cecf": element_id }
        });
        Mock::given(method("POST"))
            .and(path(format!("/session/{SESSION_ID}/element")))
            .and(body_json(json!({ "using": "css selector", "value": css })))
            .respond_with(ResponseTemplate::new(200).set_body_json(found))
            .mount(&self.server)
            .await;

        let base = format!("/session/{SESSION_ID}/element/{element_id}");
        for (endpoint, value) in [
            ("displayed", json!(state.displayed)),
            ("enabled", json!(state.enabled)),
            ("selected", json!(state.selected)),
            ("text", json!(state.text)),
            ("name", json!("div")),
        ] {
            Mock::given(method("GET"))
                .and(path(format!("{base}/{endpoint}")))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({ "value": value })),
                )
                .mount(&self.server)
                .await;
        }
        // Attribute lookups come back empty so log descriptors fall through.
        Mock::given(method("GET"))
            .and(path_regex(format!(r"^{base}/attribute/.*$")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": null })))
            .mount(&self.server)
            .await;
        for endpoint in ["click", "clear", "value"] {
            Mock::given(method("POST"))
                .and(path(format!("{base}/{endpoint}")))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({ "value": null })),
                )
                .mount(&self.server)
                .await;
        }
    }

    /// Script executions for this `mobile:` command succeed or fail wholesale.
    pub async fn mount_mobile_command(&self, command: &str, succeeds: bool) {
        let response = if succeeds {
            ResponseTemplate::new(200).set_body_json(json!({ "value": null }))
        } else {
            ResponseTemplate::new(500).set_body_json(json!({
                "value": {
                    "error": "unknown error",
                    "message": format!("{command} is not supported"),
                    "stacktrace": ""
                }
            }))
        };
        Mock::given(method("POST"))
            .and(path(format!("/session/{SESSION_ID}/execute/sync")))
            .and(body_partial_json(json!({ "script": command })))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_current_url(&self, url: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/session/{SESSION_ID}/url")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": url })))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_screenshot(&self, png: &[u8]) {
        use base64::Engine as _;
        let encoded = base64::engine::general_purpose::STANDARD.encode(png);
        Mock::given(method("GET"))
            .and(path(format!("/session/{SESSION_ID}/screenshot")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": encoded })))
            .mount(&self.server)
            .await;
    }
}

/// Fixed answers a mocked element gives for state and text queries.
#[derive(Debug, Clone, Copy)]
pub struct MockElement {
    pub displayed: bool,
    pub enabled: bool,
    pub selected: bool,
    pub text: &'static str,
}

impl Default for MockElement {
    fn default() -> Self {
        MockElement {
            displayed: true,
            enabled: true,
            selected: false,
            text: "",
        }
    }
}
