//! Failure observer: per-test lifecycle hooks and failure diagnostics.
//!
//! The observer is registered with the suite explicitly (no runner
//! annotations) and consumes one outcome event per test. On failure it
//! pulls the active session from the registry and forwards a screenshot,
//! the current URL (web sessions) and the failure text to the report sink.
//! Capture problems are logged and dropped: the driver may already be dead,
//! and a broken screenshot must not mask the original failure.

use tracing::{error, info, warn};

use crate::report::ReportSink;
use crate::session::{Session, SessionRegistry};

/// Final status of one test, as reported by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    /// Failed, but within the suite's configured success threshold.
    FailedWithinThreshold,
}

/// One per-test outcome event. Produced by the test flow, consumed once.
#[derive(Debug, Clone)]
pub struct TestOutcome {
    pub name: String,
    pub status: TestStatus,
    pub failure: Option<String>,
}

impl TestOutcome {
    pub fn passed(name: impl Into<String>) -> Self {
        TestOutcome {
            name: name.into(),
            status: TestStatus::Passed,
            failure: None,
        }
    }

    pub fn failed(name: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        TestOutcome {
            name: name.into(),
            status: TestStatus::Failed,
            failure: Some(cause.to_string()),
        }
    }

    pub fn skipped(name: impl Into<String>, reason: Option<String>) -> Self {
        TestOutcome {
            name: name.into(),
            status: TestStatus::Skipped,
            failure: reason,
        }
    }
}

/// Suite listener hooked into test start/success/failure/skip.
#[derive(Debug)]
pub struct TestObserver {
    sink: ReportSink,
}

impl TestObserver {
    pub fn new(sink: ReportSink) -> Self {
        TestObserver { sink }
    }

    pub fn sink(&self) -> &ReportSink {
        &self.sink
    }

    pub fn on_suite_start(&self, suite: &str) {
        info!(suite, "========== test suite started ==========");
    }

    pub fn on_suite_finish(&self, suite: &str, passed: usize, failed: usize, skipped: usize) {
        info!(suite, passed, failed, skipped, "========== test suite finished ==========");
    }

    pub fn on_test_start(&self, test: &str) {
        info!(test, "---------- test started ----------");
    }

    /// Dispatches one outcome event, attaching diagnostics on failure.
    pub async fn observe(&self, outcome: &TestOutcome, registry: &SessionRegistry) {
        match outcome.status {
            TestStatus::Passed => info!(test = %outcome.name, "---------- test PASSED ----------"),
            TestStatus::Skipped => {
                warn!(test = %outcome.name, reason = outcome.failure.as_deref(), "---------- test SKIPPED ----------");
            }
            TestStatus::FailedWithinThreshold => {
                warn!(test = %outcome.name, "---------- test failed within success threshold ----------");
            }
            TestStatus::Failed => {
                error!(
                    test = %outcome.name,
                    cause = outcome.failure.as_deref(),
                    "---------- test FAILED ----------"
                );
                self.capture_failure_diagnostics(outcome, registry.get().as_ref())
                    .await;
            }
        }
    }

    /// Screenshot + URL + exception text, each best-effort.
    async fn capture_failure_diagnostics(&self, outcome: &TestOutcome, session: Option<&Session>) {
        if let Some(session) = session {
            match session.screenshot().await {
                Ok(png) => self.sink.attach("Failure Screenshot", "image/png", &png),
                Err(err) => warn!(error = %err, "failed to capture failure screenshot"),
            }
            if !session.platform().is_mobile() {
                match session.current_url().await {
                    Ok(url) => self.sink.attach_text("Failed URL", &url),
                    Err(err) => warn!(error = %err, "failed to read current url"),
                }
            }
        }
        if let Some(cause) = &outcome.failure {
            self.sink.attach_text("Exception", cause);
        }
    }
}
