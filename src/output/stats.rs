//! Statistics reporting.

use console::style;

use crate::labels::{ClassMap, VocAnnotations};
use crate::reconcile::{JobReport, RunState};

/// Print the outcome of one reconciliation pass.
pub fn print_job_report(report: &JobReport) {
    println!();
    println!(
        "{}",
        style(format!("Job {} ({}):", report.name, report.mode)).bold()
    );

    if report.dry_run {
        for file in &report.planned {
            println!("  would delete {}", file);
        }
        println!("  Planned:  {} (dry run)", report.planned.len());
    } else {
        println!("  Planned:  {}", report.planned.len());
        println!("  Deleted:  {}", report.deleted);
    }
}

/// Print totals across all passes.
pub fn print_run_stats(state: &RunState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Statistics:").bold());
    println!("  Jobs processed: {}", state.jobs_processed);
    if state.jobs_failed > 0 {
        println!("  Jobs failed:    {}", style(state.jobs_failed).red());
    }
    println!("  Planned:  {}", state.files_planned);
    println!("  Deleted:  {}", style(state.files_deleted).green());
    println!("{}", style("═".repeat(50)).dim());
}

/// Print parsed label records with their class indices.
pub fn print_label_summary(annotations: &VocAnnotations, classes: &ClassMap, indices: &[usize]) {
    println!();
    println!("{}", style("Classes:").bold());
    for (index, class) in classes.classes().iter().enumerate() {
        println!("  {:>3}  {}", index, class);
    }

    println!();
    println!("{}", style("Records:").bold());
    for (record, class) in annotations.records.iter().zip(indices) {
        println!(
            "  {}  {:?}  {} ({})",
            record.image_name,
            record.bbox.to_array(),
            record.label,
            class
        );
    }
    println!("  ({} boxes)", annotations.len());
}
