//! Pure formatting functions for UI output.
//!
//! Everything the tool prints goes through here. Colours come from
//! `console`, which drops them when the stream is not a terminal.

use console::style;

use crate::manifest::PlannedChange;
use crate::outcome::{StepOutcome, WriteWarning};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a warning to stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal write failure.
pub fn display_write_warning(warning: &WriteWarning) {
    display_warning(&warning.to_string());
}

/// Display the outcome of one write step.
pub fn display_step_outcome(outcome: &StepOutcome) {
    match outcome {
        StepOutcome::Written(files) => {
            for file in files {
                display_status(&format!("Updated {}", file));
            }
        }
        StepOutcome::Unchanged { file, reason } => {
            display_status(&format!("Left {} unchanged: {}", file, reason));
        }
        StepOutcome::Failed(warning) => display_write_warning(warning),
    }
}

/// Display the final confirmation line.
pub fn display_version_bumped(version: &str) {
    display_success(&format!("Version bumped to {}", version));
}

/// Render one planned change as `file: old -> new`.
pub fn format_planned_change(change: &PlannedChange) -> String {
    let current = match &change.current {
        Ok(Some(version)) => version.clone(),
        Ok(None) => "(no version)".to_string(),
        Err(reason) => format!("(unreadable: {})", reason),
    };
    format!("{}: {} -> {}", change.file, current, change.next)
}

/// Display the changes a dry run would make.
pub fn display_dry_run_plan(version: &str, plan: &[PlannedChange]) {
    println!("{}", style(format!("Dry run: would bump version to {}", version)).bold());
    for change in plan {
        println!("  {}", format_planned_change(change));
    }
}
