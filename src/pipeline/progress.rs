//! Progress reporting.
//!
//! The pipeline emits [`ProgressEvent`]s through a [`ProgressReporter`].
//! [`ConsoleProgress`] prints them to stderr with optional colors;
//! [`NullProgress`] discards them.
//!
//! # Example
//!
//! ```
//! use cardart::pipeline::{ConsoleProgress, ProgressEvent, ProgressReporter};
//!
//! let reporter = ConsoleProgress::with_output(Vec::new()).with_verbose(true);
//! reporter.report(ProgressEvent::RunStarted { cards: 1, total_targets: 9 });
//! ```

use super::result::TargetStatus;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Events reported during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Catalog read and targets planned
    RunStarted {
        /// Number of catalog cards
        cards: usize,
        /// Total number of targets
        total_targets: usize,
    },
    /// A target finished
    TargetCompleted {
        /// Target identifier
        target_id: String,
        /// Outcome
        status: TargetStatus,
        /// Duration in milliseconds
        duration_ms: u64,
    },
    /// Every target finished
    RunCompleted {
        /// Whether no target failed
        success: bool,
        /// Total duration in milliseconds
        duration_ms: u64,
        /// Number of files written
        succeeded: usize,
        /// Number of skipped targets
        skipped: usize,
        /// Number of failed targets
        failed: usize,
    },
    /// A recoverable problem
    Warning {
        /// Target that generated the warning (if applicable)
        target_id: Option<String>,
        /// Warning message
        message: String,
    },
}

/// Receives events from a running pipeline.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn report(&self, _event: ProgressEvent) {}
}

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Line-oriented reporter for a terminal.
///
/// Per-target lines are printed in verbose mode; failures and warnings are
/// always shown.
pub struct ConsoleProgress {
    use_colors: bool,
    verbose: bool,
    done: AtomicUsize,
    total: AtomicUsize,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleProgress {
    /// Report to stderr, colored.
    pub fn new() -> Self {
        Self::writing_to(Box::new(std::io::stderr()), true)
    }

    /// Report to `output` without colors.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self::writing_to(Box::new(output), false)
    }

    fn writing_to(out: Box<dyn Write + Send>, use_colors: bool) -> Self {
        Self {
            use_colors,
            verbose: false,
            done: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
            out: Mutex::new(out),
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn paint(&self, text: &str, ansi: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", ansi, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn line(&self, tag: &str, ansi: &str, body: std::fmt::Arguments<'_>) {
        self.write(format_args!("{} {}", self.paint(tag, ansi), body));
    }

    fn write(&self, text: std::fmt::Arguments<'_>) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", text);
        }
    }

    fn target_completed(&self, target_id: &str, status: &TargetStatus, duration_ms: u64) {
        let done = self.done.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.verbose && !status.is_failure() {
            return;
        }

        let total = self.total.load(Ordering::SeqCst);
        let outcome = match status {
            TargetStatus::Success => self.paint("ok", GREEN),
            TargetStatus::Skipped => self.paint("skipped", YELLOW),
            TargetStatus::Failed(_) => self.paint("FAILED", RED),
        };
        self.line(
            "[cardart]",
            CYAN,
            format_args!("[{}/{}] {} {} ({})", done, total, outcome, target_id, format_duration(duration_ms)),
        );
        if let TargetStatus::Failed(err) = status {
            self.write(format_args!("        {}", self.paint(err, RED)));
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::RunStarted { cards, total_targets } => {
                self.total.store(total_targets, Ordering::SeqCst);
                self.done.store(0, Ordering::SeqCst);
                self.line(
                    "[cardart]",
                    CYAN,
                    format_args!(
                        "{} {}, {} {}",
                        cards,
                        plural(cards, "card", "cards"),
                        total_targets,
                        plural(total_targets, "asset", "assets")
                    ),
                );
            }
            ProgressEvent::TargetCompleted { target_id, status, duration_ms } => {
                self.target_completed(&target_id, &status, duration_ms);
            }
            ProgressEvent::RunCompleted { success: true, duration_ms, succeeded, skipped, .. } => {
                self.line(
                    "[done]",
                    GREEN,
                    format_args!(
                        "{} written, {} skipped in {}",
                        succeeded,
                        skipped,
                        format_duration(duration_ms)
                    ),
                );
            }
            ProgressEvent::RunCompleted { duration_ms, succeeded, skipped, failed, .. } => {
                self.line(
                    "[error]",
                    RED,
                    format_args!(
                        "Generation failed: {} written, {} skipped, {} {} in {}",
                        succeeded,
                        skipped,
                        failed,
                        plural(failed, "failure", "failures"),
                        format_duration(duration_ms)
                    ),
                );
            }
            ProgressEvent::Warning { target_id: Some(id), message } => {
                self.line("[warn]", YELLOW, format_args!("{}: {}", id, message));
            }
            ProgressEvent::Warning { target_id: None, message } => {
                self.line("[warn]", YELLOW, format_args!("{}", message));
            }
        }
    }
}

/// `150ms`, `1.5s` or `2m 5s`.
fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        let minutes = ms / 60_000;
        let seconds = (ms % 60_000) / 1000;
        format!("{}m {}s", minutes, seconds)
    }
}
