use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;

/// Package descriptor file name, relative to the project root.
pub const PACKAGE_FILE: &str = "package.json";
/// Lockfile name, relative to the project root.
pub const LOCK_FILE: &str = "package-lock.json";
/// Deployment values file, relative to the project root.
pub const VALUES_FILE: &str = "helm/values/values.yaml";

/// Startup state for one run: where the manifests live and the baseline
/// version recorded in the package descriptor.
///
/// Loaded once and passed by reference into resolution and writing.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpConfig {
    pub root: PathBuf,

    /// Baseline from `package.json`, or the reason it could not be read.
    pub baseline: Result<Version, String>,
}

/// Only the field we need from the descriptor; everything else is ignored.
#[derive(Debug, Deserialize)]
struct PackageVersion {
    version: Option<String>,
}

impl BumpConfig {
    /// Creates a configuration for `root` with a known baseline.
    pub fn new(root: impl Into<PathBuf>, baseline: Version) -> Self {
        BumpConfig {
            root: root.into(),
            baseline: Ok(baseline),
        }
    }

    pub fn package_path(&self) -> PathBuf {
        self.root.join(PACKAGE_FILE)
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(LOCK_FILE)
    }

    pub fn values_path(&self) -> PathBuf {
        self.root.join(VALUES_FILE)
    }

    /// The baseline as borrowed views, ready for `resolve_version`.
    pub fn baseline(&self) -> Result<&Version, &str> {
        self.baseline.as_ref().map_err(String::as_str)
    }
}

/// Loads the run configuration for a project root.
///
/// Uses `root` when given, otherwise the current directory. A missing or
/// malformed `package.json` does not fail loading: the reason is kept in
/// `baseline` and only matters if a relative bump is requested.
///
/// # Returns
/// * `Ok(BumpConfig)` - Loaded configuration
/// * `Err` - If the current directory cannot be determined
pub fn load_config(root: Option<&Path>) -> std::io::Result<BumpConfig> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let baseline = read_baseline(&root.join(PACKAGE_FILE));
    Ok(BumpConfig { root, baseline })
}

/// Reads the `version` field of a package descriptor as a semantic version.
pub fn read_baseline(package_path: &Path) -> Result<Version, String> {
    let name = package_path.display();
    let content = fs::read_to_string(package_path)
        .map_err(|e| format!("cannot read {}: {}", name, e))?;
    let package: PackageVersion = serde_json::from_str(&content)
        .map_err(|e| format!("cannot parse {}: {}", name, e))?;
    let version = package
        .version
        .ok_or_else(|| format!("{} has no version field", name))?;
    Version::parse(&version)
        .map_err(|e| format!("{} version '{}' is not semver: {}", name, version, e))
}
