//! Terminal sinks for scaffold progress and notifications.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use abpgen_core::application::ports::{ProgressReporter, Severity, UserNotifier};

use crate::output::OutputManager;

const BAR_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// Progress bar over stderr.
///
/// The bar is created hidden when nobody is watching; reports then only
/// reach the log.
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new(visible: bool) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(0),
            if visible {
                ProgressDrawTarget::stderr()
            } else {
                ProgressDrawTarget::hidden()
            },
        );
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }
}

impl ProgressReporter for TerminalProgress {
    fn report(&self, message: &str, step: u32, total: u32) {
        tracing::debug!(step, total, "{message}");
        self.bar.set_length(u64::from(total));
        self.bar.set_position(u64::from(step));
        self.bar.set_message(message.to_string());
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Shows notifications through the [`OutputManager`].
///
/// Warnings go through `warning`, so `--quiet` hides them; the failure still
/// reaches the user as the command's error.
pub struct ConsoleNotifier {
    output: OutputManager,
}

impl ConsoleNotifier {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl UserNotifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let written = match severity {
            Severity::Info => self.output.success(message),
            Severity::Warning => self.output.warning(message),
        };
        if let Err(e) = written {
            tracing::warn!(error = %e, "could not write notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_progress_accepts_reports() {
        let progress = TerminalProgress::new(false);
        assert!(progress.bar.is_hidden());
        progress.report("Generating service file: OrderAppService.cs", 1, 4);
        progress.report("Generating interface file: IOrderAppService.cs", 2, 4);
        assert_eq!(progress.bar.position(), 2);
        assert_eq!(progress.bar.length(), Some(4));
        progress.finish();
        assert!(progress.bar.is_finished());
    }
}
