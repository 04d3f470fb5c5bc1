//! Manifest writer: applies a resolved version to the project files.
//!
//! Two independent scopes, always in this order:
//! - `package.json` + `package-lock.json`, read and updated together
//! - `helm/values/values.yaml`, a single line substitution
//!
//! A failure in one scope is reported as a [`StepOutcome::Failed`] and never
//! stops the other.

use std::fs;
use std::path::{Path, PathBuf};

pub mod json;
pub mod values;

use crate::config::BumpConfig;
use crate::error::BumpError;
use crate::outcome::{FailureCause, FileGroup, StepOutcome, WriteWarning};
use crate::version::ResolvedVersion;

use json::JsonManifest;

/// A file-level failure, before it is attributed to a write scope.
#[derive(Debug)]
struct FileFailure {
    path: PathBuf,
    error: BumpError,
}

impl FileFailure {
    fn at(path: &Path) -> impl FnOnce(BumpError) -> FileFailure + '_ {
        move |error| FileFailure {
            path: path.to_path_buf(),
            error,
        }
    }

    fn into_warning(self, group: FileGroup) -> WriteWarning {
        let cause = match &self.error {
            BumpError::Io(err) => FailureCause::from_io(err),
            BumpError::Json(_) | BumpError::Manifest(_) => FailureCause::Malformed,
            _ => FailureCause::Other,
        };
        WriteWarning::new(
            group,
            cause,
            format!("{}: {}", self.path.display(), self.error),
        )
    }
}

/// Planned change for one file, as reported by a dry run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedChange {
    pub file: String,
    /// Current version, or why it could not be read
    pub current: Result<Option<String>, String>,
    pub next: String,
}

fn display_name(config: &BumpConfig, path: &Path) -> String {
    path.strip_prefix(&config.root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn update_package_group(
    config: &BumpConfig,
    version: &ResolvedVersion,
) -> Result<Vec<String>, FileFailure> {
    let package_path = config.package_path();
    let lock_path = config.lock_path();

    let mut package = JsonManifest::load(&package_path).map_err(FileFailure::at(&package_path))?;
    let mut lock = JsonManifest::load(&lock_path).map_err(FileFailure::at(&lock_path))?;

    json::set_version(&mut package.document, version.as_str())
        .map_err(FileFailure::at(&package_path))?;
    json::set_lock_version(&mut lock.document, version.as_str())
        .map_err(FileFailure::at(&lock_path))?;

    package.save().map_err(FileFailure::at(&package_path))?;
    lock.save().map_err(FileFailure::at(&lock_path))?;

    Ok(vec![
        display_name(config, &package_path),
        display_name(config, &lock_path),
    ])
}

/// Writes the version into `package.json` and `package-lock.json`.
///
/// Both documents are loaded and updated in memory before either is written,
/// so a missing or malformed file leaves both untouched.
pub fn write_package_group(config: &BumpConfig, version: &ResolvedVersion) -> StepOutcome {
    match update_package_group(config, version) {
        Ok(files) => StepOutcome::Written(files),
        Err(failure) => StepOutcome::Failed(failure.into_warning(FileGroup::Package)),
    }
}

/// Writes the version into the first `version:` line of the values file.
pub fn write_values_file(config: &BumpConfig, version: &ResolvedVersion) -> StepOutcome {
    let path = config.values_path();
    let file = display_name(config, &path);

    let result = fs::read_to_string(&path).and_then(|content| {
        match values::replace_version_line(&content, version.as_str()) {
            Some(updated) => fs::write(&path, updated).map(|_| true),
            None => Ok(false),
        }
    });

    match result {
        Ok(true) => StepOutcome::Written(vec![file]),
        Ok(false) => StepOutcome::Unchanged {
            file,
            reason: "no line starts with 'version:'".to_string(),
        },
        Err(error) => StepOutcome::Failed(
            FileFailure {
                path,
                error: error.into(),
            }
            .into_warning(FileGroup::Values),
        ),
    }
}

/// Runs both write scopes in order and returns each outcome.
pub fn write_all(config: &BumpConfig, version: &ResolvedVersion) -> Vec<StepOutcome> {
    vec![
        write_package_group(config, version),
        write_values_file(config, version),
    ]
}

/// Reads what each file holds now without writing anything.
pub fn plan_changes(config: &BumpConfig, version: &ResolvedVersion) -> Vec<PlannedChange> {
    let json_current = |path: &Path| -> Result<Option<String>, String> {
        JsonManifest::load(path)
            .map(|manifest| json::current_version(&manifest.document).map(str::to_string))
            .map_err(|e| e.to_string())
    };

    let values_path = config.values_path();
    let values_current = fs::read_to_string(&values_path)
        .map(|content| values::current_version(&content))
        .map_err(|e| e.to_string());

    vec![
        PlannedChange {
            file: display_name(config, &config.package_path()),
            current: json_current(&config.package_path()),
            next: version.to_string(),
        },
        PlannedChange {
            file: display_name(config, &config.lock_path()),
            current: json_current(&config.lock_path()),
            next: version.to_string(),
        },
        PlannedChange {
            file: display_name(config, &values_path),
            current: values_current,
            next: version.to_string(),
        },
    ]
}
