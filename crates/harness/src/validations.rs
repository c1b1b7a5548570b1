//! Validation wrapper: asserting checks and non-asserting probes.
//!
//! Both classes share the action wrapper's waits and lookups; they differ
//! only in failure propagation. Asserting validations fail loud: any
//! condition that does not hold, including an element that never appears,
//! becomes an [`Error::Assertion`] carrying expected vs. actual. Probing
//! queries fail quiet: every error, wait timeouts included, collapses to
//! `false`. That dual contract is deliberate and must not be blurred.

use std::time::Duration;

use tracing::{debug, info};

use crate::actions::{Actions, DEFAULT_TIMEOUT, ElementState};
use crate::error::{Error, Result};
use crate::selector::Locator;
use crate::session::Session;

/// Assertion and probe operations bound to one session.
#[derive(Debug, Clone)]
pub struct Validations {
    actions: Actions,
}

impl Validations {
    pub fn new(session: &Session) -> Self {
        Validations {
            actions: Actions::new(session),
        }
    }

    // ---- asserting validations: raise on failure ----

    /// Asserts the element becomes displayed within the default wait bound.
    pub async fn validate_displayed(&self, locator: &Locator) -> Result<()> {
        info!(element = locator.name(), "validating element is displayed");
        self.actions
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await
            .map_err(|err| {
                Error::assertion(
                    format!("'{}' should be displayed", locator.name()),
                    "visible",
                    format!("not visible ({err})"),
                )
            })?;
        Ok(())
    }

    /// Asserts the element is gone or hidden within the default wait bound.
    pub async fn validate_not_displayed(&self, locator: &Locator) -> Result<()> {
        info!(element = locator.name(), "validating element is NOT displayed");
        self.actions
            .wait_invisible(locator, DEFAULT_TIMEOUT)
            .await
            .map_err(|err| {
                Error::assertion(
                    format!("'{}' should NOT be displayed", locator.name()),
                    "invisible",
                    format!("still visible ({err})"),
                )
            })
    }

    pub async fn validate_enabled(&self, locator: &Locator) -> Result<()> {
        info!(element = locator.name(), "validating element is enabled");
        let element = self.visible_element(locator).await?;
        let enabled = element.is_enabled().await?;
        if !enabled {
            return Err(Error::assertion(
                format!("'{}' should be enabled", locator.name()),
                "enabled",
                "disabled",
            ));
        }
        Ok(())
    }

    pub async fn validate_disabled(&self, locator: &Locator) -> Result<()> {
        info!(element = locator.name(), "validating element is disabled");
        let element = self.visible_element(locator).await?;
        let enabled = element.is_enabled().await?;
        if enabled {
            return Err(Error::assertion(
                format!("'{}' should be disabled", locator.name()),
                "disabled",
                "enabled",
            ));
        }
        Ok(())
    }

    pub async fn validate_selected(&self, locator: &Locator) -> Result<()> {
        info!(element = locator.name(), "validating element is selected");
        let element = self.visible_element(locator).await?;
        let selected = element.is_selected().await?;
        if !selected {
            return Err(Error::assertion(
                format!("'{}' should be selected", locator.name()),
                "selected",
                "not selected",
            ));
        }
        Ok(())
    }

    /// Asserts element text equals `expected` exactly.
    pub async fn validate_text_equals(&self, locator: &Locator, expected: &str) -> Result<()> {
        info!(element = locator.name(), expected, "validating text equals");
        let actual = self.actions.text(locator).await.map_err(|err| {
            lookup_failure(locator, &format!("text '{expected}'"), err)
        })?;
        if actual != expected {
            return Err(Error::assertion(
                format!("'{}' text mismatch", locator.name()),
                format!("'{expected}'"),
                format!("'{actual}'"),
            ));
        }
        Ok(())
    }

    pub async fn validate_text_contains(&self, locator: &Locator, expected: &str) -> Result<()> {
        info!(element = locator.name(), expected, "validating text contains");
        let actual = self.actions.text(locator).await.map_err(|err| {
            lookup_failure(locator, &format!("text containing '{expected}'"), err)
        })?;
        if !actual.contains(expected) {
            return Err(Error::assertion(
                format!("'{}' should contain '{expected}'", locator.name()),
                format!("text containing '{expected}'"),
                format!("'{actual}'"),
            ));
        }
        Ok(())
    }

    pub async fn validate_text_not_empty(&self, locator: &Locator) -> Result<()> {
        info!(element = locator.name(), "validating text is not empty");
        let actual = self
            .actions
            .text(locator)
            .await
            .map_err(|err| lookup_failure(locator, "non-empty text", err))?;
        if actual.is_empty() {
            return Err(Error::assertion(
                format!("'{}' text should not be empty", locator.name()),
                "non-empty text",
                "''",
            ));
        }
        Ok(())
    }

    /// Asserts the page title equals `expected`.
    pub async fn validate_title_equals(&self, expected: &str) -> Result<()> {
        let actual = self.actions.title().await?;
        info!(expected, actual, "validating page title equals");
        if actual != expected {
            return Err(Error::assertion(
                "page title mismatch",
                format!("'{expected}'"),
                format!("'{actual}'"),
            ));
        }
        Ok(())
    }

    pub async fn validate_title_contains(&self, expected: &str) -> Result<()> {
        let actual = self.actions.title().await?;
        info!(expected, actual, "validating page title contains");
        if !actual.contains(expected) {
            return Err(Error::assertion(
                format!("page title should contain '{expected}'"),
                format!("title containing '{expected}'"),
                format!("'{actual}'"),
            ));
        }
        Ok(())
    }

    pub async fn validate_url_contains(&self, expected: &str) -> Result<()> {
        let actual = self.actions.current_url().await?;
        info!(expected, actual, "validating url contains");
        if !actual.contains(expected) {
            return Err(Error::assertion(
                format!("URL should contain '{expected}'"),
                format!("URL containing '{expected}'"),
                format!("'{actual}'"),
            ));
        }
        Ok(())
    }

    /// Asserts an attribute value equals `expected`.
    pub async fn validate_attribute(
        &self,
        locator: &Locator,
        attribute: &str,
        expected: &str,
    ) -> Result<()> {
        info!(element = locator.name(), attribute, expected, "validating attribute");
        let actual = self
            .actions
            .attribute(locator, attribute)
            .await
            .map_err(|err| lookup_failure(locator, &format!("attribute '{attribute}'"), err))?
            .unwrap_or_default();
        if actual != expected {
            return Err(Error::assertion(
                format!("'{}' attribute '{attribute}' mismatch", locator.name()),
                format!("'{expected}'"),
                format!("'{actual}'"),
            ));
        }
        Ok(())
    }

    /// Asserts a count matches.
    pub fn validate_count_equals(
        &self,
        actual: usize,
        expected: usize,
        description: &str,
    ) -> Result<()> {
        info!(description, expected, actual, "validating count equals");
        if actual != expected {
            return Err(Error::assertion(
                format!("{description} count mismatch"),
                expected,
                actual,
            ));
        }
        Ok(())
    }

    pub fn validate_count_greater_than(
        &self,
        actual: usize,
        min: usize,
        description: &str,
    ) -> Result<()> {
        info!(description, min, actual, "validating count greater than");
        if actual <= min {
            return Err(Error::assertion(
                format!("{description} count should be greater than {min}"),
                format!("> {min}"),
                actual,
            ));
        }
        Ok(())
    }

    /// Asserts a condition holds.
    pub fn validate_true(&self, condition: bool, message: &str) -> Result<()> {
        info!(condition, message, "validating condition is TRUE");
        if !condition {
            return Err(Error::assertion(message, "true", "false"));
        }
        Ok(())
    }

    pub fn validate_false(&self, condition: bool, message: &str) -> Result<()> {
        info!(condition, message, "validating condition is FALSE");
        if condition {
            return Err(Error::assertion(message, "false", "true"));
        }
        Ok(())
    }

    /// Asserts two values are equal.
    pub fn validate_eq<T: PartialEq + std::fmt::Debug>(
        &self,
        actual: T,
        expected: T,
        message: &str,
    ) -> Result<()> {
        info!(message, ?expected, ?actual, "validating values are equal");
        if actual != expected {
            return Err(Error::assertion(
                message,
                format!("{expected:?}"),
                format!("{actual:?}"),
            ));
        }
        Ok(())
    }

    pub fn validate_ne<T: PartialEq + std::fmt::Debug>(
        &self,
        actual: T,
        not_expected: T,
        message: &str,
    ) -> Result<()> {
        info!(message, ?not_expected, ?actual, "validating values are NOT equal");
        if actual == not_expected {
            return Err(Error::assertion(
                message,
                format!("anything but {not_expected:?}"),
                format!("{actual:?}"),
            ));
        }
        Ok(())
    }

    // ---- probing queries: never raise ----

    /// Whether the element is currently displayed. A single immediate check;
    /// any error, including a missing element, is `false`.
    pub async fn is_displayed(&self, locator: &Locator) -> bool {
        self.probe(locator, ElementState::Visible, Duration::ZERO)
            .await
    }

    /// Whether the element is currently enabled. Visibility plays no part:
    /// a hidden control that is enabled still reports `true`.
    pub async fn is_enabled(&self, locator: &Locator) -> bool {
        let result = async {
            let by = locator.resolve(self.actions.session().platform())?;
            let element = self.actions.session().driver().find(by).await?;
            Ok::<bool, Error>(element.is_enabled().await?)
        }
        .await;
        match result {
            Ok(enabled) => enabled,
            Err(err) => {
                debug!(element = locator.name(), error = %err, "probe: not enabled");
                false
            }
        }
    }

    /// Whether the element (checkbox/radio) is currently selected.
    pub async fn is_selected(&self, locator: &Locator) -> bool {
        let result = async {
            let by = locator.resolve(self.actions.session().platform())?;
            let element = self.actions.session().driver().find(by).await?;
            Ok::<bool, Error>(element.is_selected().await?)
        }
        .await;
        match result {
            Ok(selected) => selected,
            Err(err) => {
                debug!(element = locator.name(), error = %err, "probe: not selected");
                false
            }
        }
    }

    /// Waits up to `timeout` for the element to be displayed; `false` on
    /// timeout or any other error. Never raises, never hangs past the bound.
    pub async fn is_displayed_within(&self, locator: &Locator, timeout: Duration) -> bool {
        self.probe(locator, ElementState::Visible, timeout).await
    }

    async fn probe(&self, locator: &Locator, state: ElementState, timeout: Duration) -> bool {
        match self.actions.wait_for(locator, state, timeout).await {
            Ok(_) => true,
            Err(err) => {
                debug!(element = locator.name(), state = %state, error = %err, "probe negative");
                false
            }
        }
    }

    async fn visible_element(&self, locator: &Locator) -> Result<thirtyfour::WebElement> {
        self.actions
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await
            .map_err(|err| lookup_failure(locator, "a visible element", err))
    }
}

/// Converts a lookup/wait error inside an asserting validation into the
/// assertion failure the caller expects, keeping the element name and an
/// expected/actual pair in the message.
fn lookup_failure(locator: &Locator, expected: &str, err: Error) -> Error {
    Error::assertion(
        format!("'{}' validation failed", locator.name()),
        expected,
        format!("element unavailable ({err})"),
    )
}
