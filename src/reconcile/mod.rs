//! File-set reconciliation.
//!
//! Provides:
//! - Keep-set construction from a source folder
//! - Keep-list and complement deletion plans
//! - Passes that execute a plan, and per-run totals

pub mod plan;
pub mod run;
pub mod state;

pub use plan::{build_keep_set, plan_complement, plan_keep_list};
pub use run::{reconcile_complement, reconcile_keep_list, run_job};
pub use state::{JobReport, RunState};
