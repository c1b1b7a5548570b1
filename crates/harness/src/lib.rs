//! Cross-platform UI test harness.
//!
//! Drives web browsers through Selenium and mobile apps through Appium
//! behind one set of wrappers: bounded-wait element actions, loud and
//! quiet validations, a per-suite session lifecycle, failure diagnostics,
//! and small HTTP/SQL clients for backend checks.

pub mod actions;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod observer;
pub mod report;
pub mod selector;
pub mod session;
pub mod validations;

pub use actions::{Actions, DEFAULT_TIMEOUT, ElementState};
pub use api::{ApiClient, ApiResponse};
pub use config::Config;
pub use db::{DbClient, DbRow, SqlParam};
pub use error::{Error, Result};
pub use lifecycle::Harness;
pub use logging::init_test_logging;
pub use observer::{TestObserver, TestOutcome, TestStatus};
pub use report::ReportSink;
pub use selector::{Locator, Platform};
pub use session::{Session, SessionRegistry};
pub use validations::Validations;
