//! Configuration provider.
//!
//! Settings are flat `key=value` text, loaded once at suite start. Lookup
//! precedence for every key: process environment > settings file > the
//! default supplied at the call site. A missing settings file is fatal; a
//! missing key is not.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Default location of the settings file, relative to the suite crate root.
pub const DEFAULT_SETTINGS_PATH: &str = "config/app.properties";

/// Immutable view of the suite settings. Values never change after load;
/// there is no hot-reload.
#[derive(Debug, Clone)]
pub struct Config {
    values: HashMap<String, String>,
}

impl Config {
    /// Loads settings from a `key=value` file.
    ///
    /// An unreadable file aborts startup with [`Error::Config`]; the suite
    /// cannot meaningfully proceed without its settings resource.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Config {
            path: path.display().to_string(),
            source,
        })?;

        let mut values = HashMap::new();
        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                values.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        info!(path = %path.display(), keys = values.len(), "settings loaded");
        Ok(Config { values })
    }

    /// Builds a config from in-memory pairs. Used by tests and by callers
    /// that assemble settings programmatically.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Config {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolves a setting. Precedence: environment variable named `key` >
    /// settings file > `default`. Missing keys are not an error.
    pub fn get(&self, key: &str, default: &str) -> String {
        if let Ok(value) = std::env::var(key) {
            debug!(key, value, "setting resolved from environment override");
            return value;
        }
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolves a boolean setting. Anything other than `true` (ASCII
    /// case-insensitive) counts as false.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        let fallback = if default { "true" } else { "false" };
        self.get(key, fallback).eq_ignore_ascii_case("true")
    }

    /// Resolves a numeric setting, keeping the default on parse failure.
    pub fn get_u64(&self, key: &str, default: u64) -> u64 {
        self.get(key, &default.to_string())
            .parse()
            .unwrap_or(default)
    }
}
