//! Progress and notification sinks.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use abpgen_core::application::ports::{ProgressReporter, Severity, UserNotifier};

/// Sends progress and notifications to `tracing`.
///
/// Used when no terminal is attached; the events show up wherever the host
/// routes its logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn report(&self, message: &str, step: u32, total: u32) {
        info!(step, total, "{message}");
    }

    fn finish(&self) {
        info!("progress finished");
    }
}

impl UserNotifier for TracingReporter {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => info!("{message}"),
            Severity::Warning => warn!("{message}"),
        }
    }
}

/// Everything a [`RecordingReporter`] saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recording {
    pub progress: Vec<(String, u32, u32)>,
    pub notifications: Vec<(String, Severity)>,
    pub finished: u32,
}

/// Keeps every report in memory (testing).
///
/// Clones share the same recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn snapshot(&self) -> Recording {
        self.inner
            .lock()
            .map(|recording| recording.clone())
            .unwrap_or_default()
    }

    fn with(&self, f: impl FnOnce(&mut Recording)) {
        if let Ok(mut recording) = self.inner.lock() {
            f(&mut recording);
        }
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str, step: u32, total: u32) {
        self.with(|r| r.progress.push((message.to_string(), step, total)));
    }

    fn finish(&self) {
        self.with(|r| r.finished += 1);
    }
}

impl UserNotifier for RecordingReporter {
    fn notify(&self, message: &str, severity: Severity) {
        self.with(|r| r.notifications.push((message.to_string(), severity)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_is_shared_between_clones() {
        let reporter = RecordingReporter::new();
        let progress: Box<dyn ProgressReporter> = Box::new(reporter.clone());
        let notifier: Box<dyn UserNotifier> = Box::new(reporter.clone());

        progress.report("Generating service file: A.cs", 1, 4);
        notifier.notify("Done!", Severity::Info);
        progress.finish();

        let recording = reporter.snapshot();
        assert_eq!(
            recording.progress,
            [("Generating service file: A.cs".to_string(), 1, 4)]
        );
        assert_eq!(recording.notifications, [("Done!".to_string(), Severity::Info)]);
        assert_eq!(recording.finished, 1);
    }

    #[test]
    fn tracing_reporter_is_silent_without_subscriber() {
        let reporter = TracingReporter;
        reporter.report("step", 1, 2);
        reporter.notify("warn", Severity::Warning);
        reporter.finish();
    }
}
