//! Platform-aware element locators.
//!
//! Page objects declare a [`Locator`] per on-screen control: a logical name
//! used in logs and failure messages, plus one selector per target platform.
//! Resolution to a concrete WebDriver `By` happens at action time, against
//! the platform the active session was launched for.

use std::str::FromStr;

use thirtyfour::By;

use crate::error::{Error, Result};

/// Target platform of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Web,
}

impl Platform {
    pub fn is_mobile(self) -> bool {
        matches!(self, Platform::Android | Platform::Ios)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Web => "web",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "web" | "browser" => Ok(Platform::Web),
            _ => Err(Error::Unsupported {
                what: "platform",
                value: value.to_string(),
            }),
        }
    }
}

/// Selector record for one control, keyed by platform.
#[derive(Debug, Clone)]
enum Selector {
    Mobile { android: By, ios: By },
    Web(By),
}

/// A named, platform-aware element selector.
#[derive(Debug, Clone)]
pub struct Locator {
    name: String,
    selector: Selector,
}

impl Locator {
    /// Mobile locator with explicit per-platform selectors.
    pub fn mobile(name: impl Into<String>, android: By, ios: By) -> Self {
        Locator {
            name: name.into(),
            selector: Selector::Mobile { android, ios },
        }
    }

    /// Mobile locator for a control exposed through its accessibility id
    /// (`content-desc` on Android, `name` on iOS).
    pub fn accessibility(name: impl Into<String>, id: &str) -> Self {
        Locator::mobile(
            name,
            By::XPath(format!("//*[@content-desc={}]", xpath_literal(id))),
            By::XPath(format!("//*[@name={}]", xpath_literal(id))),
        )
    }

    /// Web locator.
    pub fn web(name: impl Into<String>, by: By) -> Self {
        Locator {
            name: name.into(),
            selector: Selector::Web(by),
        }
    }

    /// Logical name used in logs and failure messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves the selector for the session's platform.
    pub fn resolve(&self, platform: Platform) -> Result<By> {
        match (&self.selector, platform) {
            (Selector::Mobile { android, .. }, Platform::Android) => Ok(android.clone()),
            (Selector::Mobile { ios, .. }, Platform::Ios) => Ok(ios.clone()),
            (Selector::Web(by), Platform::Web) => Ok(by.clone()),
            _ => Err(Error::LocatorPlatform {
                name: self.name.clone(),
                platform: platform.as_str(),
            }),
        }
    }
}

/// Quotes a string as an XPath literal, handling embedded quotes.
fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{value}'")
    } else if !value.contains('"') {
        format!("\"{value}\"")
    } else {
        // Mixed quotes need concat()
        let parts: Vec<String> = value.split('\'').map(|p| format!("'{p}'")).collect();
        format!("concat({})", parts.join(r#", "'", "#))
    }
}
