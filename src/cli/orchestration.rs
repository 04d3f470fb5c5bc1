//! Main workflow orchestration logic
//!
//! Runs the two phases of a bump in order: resolve the target version, then
//! hand it to the manifest writer. Nothing here prints; the caller renders
//! the returned [`WorkflowResult`].

use crate::cli::tokens::Invocation;
use crate::config::BumpConfig;
use crate::error::Result;
use crate::manifest::{self, PlannedChange};
use crate::outcome::StepOutcome;
use crate::version::{resolve_version, ResolvedVersion};

/// What the writing phase did with the resolved version.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteReport {
    /// One outcome per write scope, in execution order
    Applied(Vec<StepOutcome>),
    /// Dry run: the changes that would have been made
    Planned(Vec<PlannedChange>),
}

/// Result of a completed bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version every manifest was asked to hold
    pub version: ResolvedVersion,

    pub report: WriteReport,
}

impl WorkflowResult {
    /// Number of files that now hold the new version
    pub fn files_written(&self) -> usize {
        match &self.report {
            WriteReport::Applied(outcomes) => outcomes
                .iter()
                .map(|outcome| match outcome {
                    StepOutcome::Written(files) => files.len(),
                    _ => 0,
                })
                .sum(),
            WriteReport::Planned(_) => 0,
        }
    }
}

/// Main bump workflow
///
/// 1. Resolve the target version from the invocation and baseline
/// 2. Write it to the manifests, or only plan the writes on `--dry-run`
///
/// # Returns
///
/// * `Ok(WorkflowResult)` - the version and per-file report, even when some
///   or all writes failed
/// * `Err` - only when no version could be resolved; no file was touched
pub fn run_bump_workflow(invocation: &Invocation, config: &BumpConfig) -> Result<WorkflowResult> {
    let version = resolve_version(invocation, config.baseline())?;

    let report = if invocation.is_dry_run() {
        WriteReport::Planned(manifest::plan_changes(config, &version))
    } else {
        WriteReport::Applied(manifest::write_all(config, &version))
    };

    Ok(WorkflowResult { version, report })
}
