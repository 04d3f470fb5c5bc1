use std::fmt;

use semver::Version;

use crate::cli::tokens::Invocation;
use crate::error::{BumpError, Result};

/// Represents the type of semantic version bump to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// The single version value threaded from resolution into the manifest writer.
///
/// Only constructed from text that passed semver validation; the text is
/// kept exactly as it will be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    text: String,
}

impl ResolvedVersion {
    /// Validates `input` against the semver grammar and keeps it verbatim.
    pub fn parse(input: &str) -> Result<Self> {
        Version::parse(input).map_err(|_| BumpError::invalid_version(input))?;
        Ok(ResolvedVersion {
            text: input.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<Version> for ResolvedVersion {
    fn from(version: Version) -> Self {
        ResolvedVersion {
            text: version.to_string(),
        }
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Bumps a version according to the specified bump type.
///
/// Increments the appropriate component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// A pre-release baseline is promoted to its release instead when the release
/// already sits at the requested level, so `1.3.0-rc.1` bumped by minor gives
/// `1.3.0` and `1.2.4-beta` bumped by patch gives `1.2.4`. Build metadata is
/// always dropped.
///
/// Fails when the incremented component would not fit in a `u64`.
///
/// # Example
/// ```ignore
/// let v = Version::new(1, 2, 3);
/// assert_eq!(bump_version(&v, VersionBump::Major)?, Version::new(2, 0, 0));
/// assert_eq!(bump_version(&v, VersionBump::Minor)?, Version::new(1, 3, 0));
/// assert_eq!(bump_version(&v, VersionBump::Patch)?, Version::new(1, 2, 4));
/// ```
pub fn bump_version(version: &Version, bump_type: VersionBump) -> Result<Version> {
    let is_prerelease = !version.pre.is_empty();
    let mut next = Version::new(version.major, version.minor, version.patch);

    match bump_type {
        VersionBump::Major => {
            if !(is_prerelease && version.minor == 0 && version.patch == 0) {
                next.major = increment(next.major, bump_type)?;
            }
            next.minor = 0;
            next.patch = 0;
        }
        VersionBump::Minor => {
            if !(is_prerelease && version.patch == 0) {
                next.minor = increment(next.minor, bump_type)?;
            }
            next.patch = 0;
        }
        VersionBump::Patch => {
            if !is_prerelease {
                next.patch = increment(next.patch, bump_type)?;
            }
        }
    }
    Ok(next)
}

fn increment(component: u64, bump_type: VersionBump) -> Result<u64> {
    component
        .checked_add(1)
        .ok_or_else(|| BumpError::baseline(format!("{} component overflows", bump_type)))
}

/// Produces the target version for this run, or the fatal error that ends it.
///
/// An explicit `version=` token wins over any bump flag. Otherwise the
/// strongest bump flag is applied to `baseline`, which is only consulted in
/// that case.
pub fn resolve_version(
    invocation: &Invocation,
    baseline: std::result::Result<&Version, &str>,
) -> Result<ResolvedVersion> {
    if let Some(explicit) = invocation.explicit_version() {
        return ResolvedVersion::parse(explicit);
    }

    let bump = invocation.bump().ok_or(BumpError::NoVersionSpecified)?;
    let current = baseline.map_err(BumpError::baseline)?;
    Ok(bump_version(current, bump)?.into())
}
