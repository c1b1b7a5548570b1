//! Report sink: attachments and steps for a test run.
//!
//! Attachments are written as timestamp-sequenced files under a results
//! directory. Everything here is a diagnostic side path: failures are
//! logged and swallowed so a broken attachment can never mask the test
//! outcome it was meant to illustrate.

use std::path::{Path, PathBuf};
use std::sync::Once;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{info, warn};

use crate::error::Result;

/// Default results directory, relative to the suite crate root.
pub const DEFAULT_RESULTS_DIR: &str = "target/test-results";

static RESULTS_CLEARED: Once = Once::new();

/// Destination for report attachments and step markers.
#[derive(Debug)]
pub struct ReportSink {
    dir: PathBuf,
    sequence: AtomicU64,
}

impl ReportSink {
    /// Opens a sink rooted at `dir`. The first sink opened in a process
    /// clears stale artifacts left over from a previous run.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        RESULTS_CLEARED.call_once(|| clear_stale_artifacts(&dir));
        ReportSink {
            dir,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes one attachment. Best-effort: any filesystem problem is logged
    /// and dropped.
    pub fn attach(&self, name: &str, mime: &str, content: &[u8]) {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let file = self
            .dir
            .join(format!("{seq:03}-{}.{}", slug(name), extension_for(mime)));
        if let Err(err) = std::fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %err, "failed to create results directory");
            return;
        }
        match std::fs::write(&file, content) {
            Ok(()) => info!(name, mime, file = %file.display(), "attachment written"),
            Err(err) => warn!(name, error = %err, "failed to write attachment"),
        }
    }

    /// Text attachment convenience.
    pub fn attach_text(&self, name: &str, content: &str) {
        self.attach(name, "text/plain", content.as_bytes());
    }

    /// Records a plain step marker.
    pub fn step(&self, description: &str) {
        info!(step = description, "step");
    }

    /// Runs an action inside a named step, logging its outcome. The action's
    /// error is propagated untouched; only the logging is the sink's concern.
    pub async fn step_with<F, Fut>(&self, description: &str, action: F) -> Result<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        info!(step = description, "step started");
        match action().await {
            Ok(()) => {
                info!(step = description, "step passed");
                Ok(())
            }
            Err(err) => {
                warn!(step = description, error = %err, "step failed");
                Err(err)
            }
        }
    }
}

fn clear_stale_artifacts(dir: &Path) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    let mut removed = 0usize;
    for entry in entries.flatten() {
        if entry.path().is_file() && std::fs::remove_file(entry.path()).is_ok() {
            removed += 1;
        }
    }
    if removed > 0 {
        info!(dir = %dir.display(), removed, "cleared stale report artifacts");
    }
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "text/plain" => "txt",
        "text/html" => "html",
        "application/json" => "json",
        _ => "bin",
    }
}
