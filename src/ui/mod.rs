//! User interface module - reporting of a finished workflow.
//!
//! - `formatter` - Pure formatting and display functions
//! - This module - Turns a [`WorkflowResult`] into output

pub mod formatter;

pub use formatter::{
    display_dry_run_plan, display_error, display_status, display_step_outcome, display_success,
    display_version_bumped, display_warning, display_write_warning, format_planned_change,
};

use crate::cli::{WorkflowResult, WriteReport};

/// Prints everything a completed run has to say.
///
/// A non-dry run always ends with the confirmation line, including when no
/// file could be written.
pub fn report_workflow(result: &WorkflowResult) {
    let version = result.version.as_str();
    match &result.report {
        WriteReport::Applied(outcomes) => {
            for outcome in outcomes {
                display_step_outcome(outcome);
            }
            display_version_bumped(version);
        }
        WriteReport::Planned(plan) => display_dry_run_plan(version, plan),
    }
}
