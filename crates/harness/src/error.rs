//! Error types for the test harness.

use thirtyfour::error::WebDriverError;
use thiserror::Error;

use crate::actions::ElementState;

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a test session.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file could not be read. Fatal at startup.
    #[error("failed to load settings file '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Session could not be created against the automation endpoint.
    /// Fatal to the suite; never retried.
    #[error("failed to create session at '{endpoint}': {source}")]
    SessionCreate {
        endpoint: String,
        #[source]
        source: WebDriverError,
    },

    /// A locator has no selector for the session's platform.
    #[error("locator '{name}' has no selector for platform {platform}")]
    LocatorPlatform { name: String, platform: &'static str },

    /// Element never reached the required state within the wait bound.
    #[error("timeout after {ms}ms waiting for '{element}' to become {state}")]
    Timeout {
        element: String,
        state: ElementState,
        ms: u64,
    },

    /// A validation did not hold. Carries expected vs. actual in the message.
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// A displayed value could not be parsed into the expected shape.
    #[error("could not parse {what} from '{text}'")]
    Parse { what: &'static str, text: String },

    /// An unsupported configuration value was supplied.
    #[error("unsupported {what}: '{value}'")]
    Unsupported { what: &'static str, value: String },

    /// HTTP request error from the API client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Database error from the SQL client.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    /// Raw WebDriver error surfaced by the underlying client.
    #[error(transparent)]
    WebDriver(#[from] WebDriverError),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this is a wait timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Returns true if this is a validation failure rather than an
    /// infrastructure error.
    pub fn is_assertion(&self) -> bool {
        matches!(self, Error::Assertion(_))
    }

    /// Builds an assertion failure with an expected/actual pair in the message.
    pub fn assertion(
        subject: impl std::fmt::Display,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Error::Assertion(format!("{subject}. Expected: {expected}, Actual: {actual}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_classifier() {
        let err = Error::Timeout {
            element: "Login button".into(),
            state: ElementState::Clickable,
            ms: 10_000,
        };
        assert!(err.is_timeout());
        assert!(!err.is_assertion());
        let msg = err.to_string();
        assert!(msg.contains("Login button"));
        assert!(msg.contains("clickable"));
    }

    #[test]
    fn assertion_builder_carries_expected_and_actual() {
        let err = Error::assertion("'Total price' text mismatch", "'$39.98'", "'$29.99'");
        assert!(err.is_assertion());
        let msg = err.to_string();
        assert!(msg.contains("Expected: '$39.98'"));
        assert!(msg.contains("Actual: '$29.99'"));
    }
}
