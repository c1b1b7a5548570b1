//! Session lifecycle: capability construction, setup, between-test reset,
//! and idempotent teardown.

use serde_json::{Map, Value, json};
use thirtyfour::WebDriver;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::selector::Platform;
use crate::session::{Session, SessionRegistry};

const DEFAULT_SELENIUM_SERVER: &str = "http://localhost:4444";
const DEFAULT_APPIUM_SERVER: &str = "http://127.0.0.1:4723";
const DEFAULT_ANDROID_DEVICE: &str = "emulator-5554";
const DEFAULT_IOS_DEVICE: &str = "iPhone 16 Pro";
const DEFAULT_IOS_VERSION: &str = "18.2";
const DEFAULT_APP_PACKAGE: &str = "com.saucelabs.mydemoapp.rn";

/// Owns the configuration and the session registry for one suite run.
///
/// There is deliberately no process-global driver slot: each suite
/// constructs a `Harness` and threads it (or its registry) to the code
/// that needs the session.
#[derive(Debug)]
pub struct Harness {
    config: Config,
    registry: SessionRegistry,
}

impl Harness {
    pub fn new(config: Config) -> Self {
        Harness {
            config,
            registry: SessionRegistry::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Creates the driver session described by the configuration and
    /// registers it. A session that cannot be created is fatal; there is
    /// no retry, the suite cannot run without it.
    pub async fn setup(&self) -> Result<Session> {
        let platform: Platform = self.config.get("platformName", "web").parse()?;
        let session = match platform {
            Platform::Web => self.setup_web().await?,
            Platform::Android | Platform::Ios => self.setup_mobile(platform).await?,
        };
        self.registry.set(session.clone());
        Ok(session)
    }

    async fn setup_web(&self) -> Result<Session> {
        let endpoint = self.config.get("selenium.server", DEFAULT_SELENIUM_SERVER);
        let browser = self.config.get("browser", "chrome");
        let headless = self.config.get_bool("headless", false);
        let caps = web_capabilities(&browser, headless)?;
        info!(%endpoint, %browser, headless, "starting web session");

        let driver = WebDriver::new(&endpoint, caps)
            .await
            .map_err(|source| Error::SessionCreate { endpoint, source })?;
        if !headless {
            if let Err(err) = driver.maximize_window().await {
                warn!(error = %err, "failed to maximize window");
            }
        }
        Ok(Session::new(driver, Platform::Web))
    }

    async fn setup_mobile(&self, platform: Platform) -> Result<Session> {
        let endpoint = self.config.get("appium.server", DEFAULT_APPIUM_SERVER);
        let app_package = self.config.get("app.package", DEFAULT_APP_PACKAGE);
        let caps = match platform {
            Platform::Android => {
                let device = self.config.get("android.device", DEFAULT_ANDROID_DEVICE);
                let app = self.config.get("android.app", "");
                android_capabilities(&device, &app)
            }
            Platform::Ios => {
                let device = self.config.get("ios.device", DEFAULT_IOS_DEVICE);
                let version = self.config.get("ios.version", DEFAULT_IOS_VERSION);
                let app = self.config.get("ios.app", "");
                ios_capabilities(&device, &version, &app)
            }
            Platform::Web => unreachable!("web handled by setup_web"),
        };
        info!(%endpoint, platform = %platform, "starting mobile session");

        let driver = WebDriver::new(&endpoint, caps)
            .await
            .map_err(|source| Error::SessionCreate { endpoint, source })?;
        Ok(Session::new(driver, platform).with_app_id(app_package))
    }

    /// Restores the app under test to a clean state between mobile tests.
    /// Web sessions have nothing to reset. Best-effort: a reset problem is
    /// logged but never fails the next test.
    pub async fn reset_between_tests(&self) {
        if let Some(session) = self.registry.get() {
            session.reset_app().await;
        }
    }

    /// Quits and unregisters the session. Safe to call when no session is
    /// registered, and safe to call twice.
    pub async fn teardown(&self) {
        if let Some(session) = self.registry.take() {
            info!("quitting driver session");
            if let Err(err) = session.quit().await {
                warn!(error = %err, "failed to quit driver session");
            }
        }
    }
}

fn as_caps(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn web_capabilities(browser: &str, headless: bool) -> Result<Map<String, Value>> {
    let caps = match browser {
        "chrome" => {
            let mut args = vec!["--disable-gpu", "--no-sandbox", "--disable-dev-shm-usage"];
            if headless {
                args.push("--headless=new");
                args.push("--window-size=1920,1080");
            }
            as_caps(json!({
                "browserName": "chrome",
                "goog:chromeOptions": { "args": args },
            }))
        }
        "firefox" => {
            let mut args: Vec<&str> = Vec::new();
            if headless {
                args.push("-headless");
            }
            as_caps(json!({
                "browserName": "firefox",
                "moz:firefoxOptions": { "args": args },
            }))
        }
        "edge" => {
            let mut args = vec!["--disable-gpu", "--no-sandbox"];
            if headless {
                args.push("--headless=new");
                args.push("--window-size=1920,1080");
            }
            as_caps(json!({
                "browserName": "MicrosoftEdge",
                "ms:edgeOptions": { "args": args },
            }))
        }
        other => {
            return Err(Error::Unsupported {
                what: "browser",
                value: other.to_string(),
            });
        }
    };
    Ok(caps)
}

fn android_capabilities(device: &str, app: &str) -> Map<String, Value> {
    let mut caps = as_caps(json!({
        "platformName": "Android",
        "appium:automationName": "UiAutomator2",
        "appium:deviceName": device,
        "appium:newCommandTimeout": 120,
    }));
    if !app.is_empty() {
        caps.insert("appium:app".into(), json!(app));
    }
    caps
}

fn ios_capabilities(device: &str, version: &str, app: &str) -> Map<String, Value> {
    let mut caps = as_caps(json!({
        "platformName": "iOS",
        "appium:automationName": "XCUITest",
        "appium:deviceName": device,
        "appium:platformVersion": version,
        "appium:newCommandTimeout": 120,
    }));
    if !app.is_empty() {
        caps.insert("appium:app".into(), json!(app));
    }
    caps
}
