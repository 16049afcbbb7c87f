//! Reconciliation result tracking.

use crate::config::ReconcileMode;
use crate::fs::FileSet;

/// Outcome of one reconciliation pass.
#[derive(Debug, Default)]
pub struct JobReport {
    pub name: String,
    pub mode: ReconcileMode,
    pub dry_run: bool,

    /// Names selected for deletion.
    pub planned: FileSet,

    /// Files actually removed (always 0 for a dry run).
    pub deleted: usize,
}

impl JobReport {
    /// Create an empty report for a named pass.
    pub fn new(name: String, mode: ReconcileMode, dry_run: bool) -> Self {
        Self {
            name,
            mode,
            dry_run,
            ..Default::default()
        }
    }
}

/// Totals across all passes of a run.
#[derive(Debug, Default)]
pub struct RunState {
    pub jobs_processed: u64,
    pub jobs_failed: u64,
    pub files_planned: u64,
    pub files_deleted: u64,
}

impl RunState {
    /// Add the numbers of a finished pass.
    pub fn add_job(&mut self, report: &JobReport) {
        self.jobs_processed += 1;
        self.files_planned += report.planned.len() as u64;
        self.files_deleted += report.deleted as u64;
    }

    /// Mark a pass as failed.
    pub fn mark_job_failed(&mut self) {
        self.jobs_failed += 1;
    }
}
