use std::fmt;
use std::io;

/// Which write scope a step covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileGroup {
    /// `package.json` and `package-lock.json`, written together
    Package,
    /// `helm/values/values.yaml`
    Values,
}

impl fmt::Display for FileGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileGroup::Package => f.write_str("package.json or package-lock.json"),
            FileGroup::Values => f.write_str("./helm/values/values.yaml"),
        }
    }
}

/// Why a write step could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    Missing,
    PermissionDenied,
    Malformed,
    Other,
}

impl FailureCause {
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FailureCause::Missing,
            io::ErrorKind::PermissionDenied => FailureCause::PermissionDenied,
            io::ErrorKind::InvalidData => FailureCause::Malformed,
            _ => FailureCause::Other,
        }
    }
}

/// Non-fatal problem reported for a write step; the run continues past it.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteWarning {
    pub group: FileGroup,
    pub cause: FailureCause,
    pub detail: String,
}

impl WriteWarning {
    pub fn new(group: FileGroup, cause: FailureCause, detail: impl Into<String>) -> Self {
        WriteWarning {
            group,
            cause,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for WriteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.group {
            FileGroup::Package => "writing new version to",
            FileGroup::Values => "writing to",
        };
        match self.cause {
            FailureCause::Missing => write!(
                f,
                "Error {} {}: file does not exist ({})",
                verb, self.group, self.detail
            ),
            FailureCause::PermissionDenied => write!(
                f,
                "Error {} {}: file is not writable ({})",
                verb, self.group, self.detail
            ),
            FailureCause::Malformed => write!(
                f,
                "Error {} {}: unexpected file content ({})",
                verb, self.group, self.detail
            ),
            FailureCause::Other => {
                write!(f, "Error {} {}: {}", verb, self.group, self.detail)
            }
        }
    }
}

/// Result of one best-effort write step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The listed files now hold the new version
    Written(Vec<String>),
    /// The file was readable but had nothing to replace
    Unchanged { file: String, reason: String },
    /// The step failed and was skipped
    Failed(WriteWarning),
}

impl StepOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, StepOutcome::Written(_))
    }

    pub fn warning(&self) -> Option<&WriteWarning> {
        match self {
            StepOutcome::Failed(warning) => Some(warning),
            _ => None,
        }
    }
}
