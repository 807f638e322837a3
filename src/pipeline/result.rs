//! Generation result types.

use std::path::PathBuf;
use std::time::Duration;

/// Status of a single target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    /// File written
    Success,
    /// Nothing written (placeholder already present, or dry run)
    Skipped,
    /// Rendering or writing failed
    Failed(String),
}

impl TargetStatus {
    /// Check if the status indicates success.
    pub fn is_success(&self) -> bool {
        matches!(self, TargetStatus::Success | TargetStatus::Skipped)
    }

    /// Check if the status indicates failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, TargetStatus::Failed(_))
    }
}

impl std::fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetStatus::Success => write!(f, "success"),
            TargetStatus::Skipped => write!(f, "skipped"),
            TargetStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Result of generating a single target.
#[derive(Debug, Clone)]
pub struct TargetResult {
    /// Target ID
    pub target_id: String,
    /// Outcome
    pub status: TargetStatus,
    /// File written, if any
    pub output: Option<PathBuf>,
    /// Render and write duration
    pub duration: Duration,
}

impl TargetResult {
    /// Create a successful result.
    pub fn success(target_id: String, output: PathBuf, duration: Duration) -> Self {
        Self { target_id, status: TargetStatus::Success, output: Some(output), duration }
    }

    /// Create a skipped result.
    pub fn skipped(target_id: String) -> Self {
        Self { target_id, status: TargetStatus::Skipped, output: None, duration: Duration::ZERO }
    }

    /// Create a failed result.
    pub fn failed(target_id: String, error: String, duration: Duration) -> Self {
        Self { target_id, status: TargetStatus::Failed(error), output: None, duration }
    }

    /// Check if this result is successful.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Result of a complete run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Number of catalog cards art was planned for
    pub cards: usize,
    /// Results for each target, in plan order
    pub targets: Vec<TargetResult>,
    /// Total run duration
    pub total_duration: Duration,
}

impl RunResult {
    /// Create an empty result for `cards` catalog entries.
    pub fn new(cards: usize) -> Self {
        Self { cards, ..Self::default() }
    }

    /// Add a target result.
    pub fn add_result(&mut self, result: TargetResult) {
        self.targets.push(result);
    }

    /// Set the total duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.total_duration = duration;
        self
    }

    /// Get the number of successful targets.
    pub fn success_count(&self) -> usize {
        self.targets.iter().filter(|r| matches!(r.status, TargetStatus::Success)).count()
    }

    /// Get the number of skipped targets.
    pub fn skipped_count(&self) -> usize {
        self.targets.iter().filter(|r| matches!(r.status, TargetStatus::Skipped)).count()
    }

    /// Get the number of failed targets.
    pub fn failed_count(&self) -> usize {
        self.targets.iter().filter(|r| r.status.is_failure()).count()
    }

    /// Check if the overall run succeeded (no failures).
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Get all files written.
    pub fn all_outputs(&self) -> Vec<&PathBuf> {
        self.targets.iter().filter_map(|r| r.output.as_ref()).collect()
    }

    /// Get failed target results.
    pub fn failures(&self) -> Vec<&TargetResult> {
        self.targets.iter().filter(|r| r.status.is_failure()).collect()
    }

    /// Format a summary of the run.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        let success = self.success_count();
        let skipped = self.skipped_count();
        let failed = self.failed_count();
        let total = self.targets.len();

        if failed > 0 {
            lines.push(format!(
                "Generation failed: {} written, {} skipped, {} failed ({} total)",
                success, skipped, failed, total
            ));
            for target in self.failures() {
                lines.push(format!("  - {}: {}", target.target_id, target.status));
            }
        } else {
            lines.push(format!(
                "Generation succeeded: {} written, {} skipped ({} total) in {:?}",
                success, skipped, total, self.total_duration
            ));
        }

        lines.join("\n")
    }
}
