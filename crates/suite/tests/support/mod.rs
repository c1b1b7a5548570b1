//! Shared scaffold for the live suites: config loading, session lifecycle
//! and outcome reporting around each test body.

// Not every test binary uses every helper.
#![allow(dead_code)]

use autotest_harness::config::DEFAULT_SETTINGS_PATH;
use autotest_harness::report::DEFAULT_RESULTS_DIR;
use autotest_harness::{
    Config, Harness, ReportSink, Result, TestObserver, TestOutcome, init_test_logging,
};

pub struct Suite {
    pub harness: Harness,
    pub observer: TestObserver,
}

impl Suite {
    /// Loads the settings file and prepares the harness and observer.
    pub fn load() -> Result<Self> {
        init_test_logging();
        let config = Config::load(DEFAULT_SETTINGS_PATH)?;
        Ok(Suite {
            harness: Harness::new(config),
            observer: TestObserver::new(ReportSink::new(DEFAULT_RESULTS_DIR)),
        })
    }

    pub fn sink(&self) -> &ReportSink {
        self.observer.sink()
    }

    /// Reports the outcome (attaching failure diagnostics while the session
    /// is still alive), tears the session down, and propagates the result.
    pub async fn finish(&self, test: &str, result: Result<()>) -> Result<()> {
        let outcome = match &result {
            Ok(()) => TestOutcome::passed(test),
            Err(err) => TestOutcome::failed(test, err),
        };
        self.observer.observe(&outcome, self.harness.registry()).await;
        self.harness.teardown().await;
        result
    }
}
