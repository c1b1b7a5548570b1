//! Session handle and the process-wide session registry.

use parking_lot::Mutex;
use serde_json::json;
use thirtyfour::WebDriver;
use tracing::{debug, warn};

use crate::error::Result;
use crate::selector::Platform;

/// One live connection to a browser or mobile-app automation backend.
///
/// Exactly one session is live per process between suite setup and teardown.
/// Cloning is cheap (the underlying driver handle is reference-counted) and
/// clones share the same remote session.
#[derive(Debug, Clone)]
pub struct Session {
    driver: WebDriver,
    platform: Platform,
    app_id: Option<String>,
}

impl Session {
    pub fn new(driver: WebDriver, platform: Platform) -> Self {
        Session {
            driver,
            platform,
            app_id: None,
        }
    }

    /// Attaches the id of the application under test, enabling
    /// [`Session::reset_app`] between mobile tests.
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// Captures a PNG screenshot of the current screen.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        Ok(self.driver.screenshot_as_png().await?)
    }

    /// Current page URL. Only meaningful for web sessions.
    pub async fn current_url(&self) -> Result<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    /// Resets the application under test to a known state: clear its data
    /// and relaunch. If the clear-data path fails for any reason, falls back
    /// to a plain terminate+relaunch without clearing. The fallback is
    /// best-effort and never fails the test run.
    pub async fn reset_app(&self) {
        let Some(app_id) = self.app_id.clone() else {
            debug!("reset_app skipped: session has no app id");
            return;
        };

        match self.clear_and_relaunch(&app_id).await {
            Ok(()) => debug!(app_id, "app data cleared and relaunched"),
            Err(err) => {
                // Logged so transient failures can be told apart from
                // platform limitations when auditing runs.
                warn!(app_id, error = %err, "clearApp failed, falling back to terminate+relaunch");
                if let Err(err) = self.mobile_command("mobile: terminateApp", &app_id).await {
                    warn!(app_id, error = %err, "terminateApp failed during fallback");
                }
                if let Err(err) = self.mobile_command("mobile: activateApp", &app_id).await {
                    warn!(app_id, error = %err, "activateApp failed during fallback");
                }
            }
        }
    }

    async fn clear_and_relaunch(&self, app_id: &str) -> Result<()> {
        self.mobile_command("mobile: clearApp", app_id).await?;
        self.mobile_command("mobile: activateApp", app_id).await?;
        Ok(())
    }

    /// Appium app-management commands travel over the script-execution
    /// endpoint with a `mobile:` prefix.
    async fn mobile_command(&self, command: &str, app_id: &str) -> Result<()> {
        self.driver
            .execute(command, vec![json!({ "appId": app_id })])
            .await?;
        Ok(())
    }

    /// Terminates the remote session. Consumes this handle; other clones of
    /// the same session become unusable.
    pub async fn quit(self) -> Result<()> {
        Ok(self.driver.quit().await?)
    }
}

/// Single slot holding the active session for this process.
///
/// One session per process by design; parallel suites run as separate OS
/// processes, each with its own registry. The interior mutex only satisfies
/// Rust's aliasing rules, it is not a concurrency feature.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    slot: Mutex<Option<Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry::default()
    }

    /// Registers the active session. Called by the lifecycle harness at
    /// suite setup.
    pub fn set(&self, session: Session) {
        debug!(platform = %session.platform(), "session registered");
        *self.slot.lock() = Some(session);
    }

    /// Returns a handle to the active session. Logs a warning and returns
    /// `None` when no session is registered so callers outside a configured
    /// suite can degrade gracefully.
    pub fn get(&self) -> Option<Session> {
        let slot = self.slot.lock();
        if slot.is_none() {
            warn!("no session registered - was harness setup called?");
        }
        slot.clone()
    }

    /// Removes and returns the active session. Used by teardown.
    pub fn take(&self) -> Option<Session> {
        self.slot.lock().take()
    }

    /// Clears the slot without touching the remote session.
    pub fn clear(&self) {
        debug!("session registry cleared");
        *self.slot.lock() = None;
    }

    pub fn has_session(&self) -> bool {
        self.slot.lock().is_some()
    }
}
