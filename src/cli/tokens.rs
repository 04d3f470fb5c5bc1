//! Scanning of the free-form invocation tokens.
//!
//! Every recognised pattern is searched for independently across all tokens,
//! so position and repetition do not matter. Flags match by prefix.

use crate::version::VersionBump;

const EXPLICIT_PREFIX: &str = "version=";
const MAJOR_FLAG: &str = "--major";
const MINOR_FLAG: &str = "--minor";
const PATCH_FLAG: &str = "--patch";
const DRY_RUN_FLAG: &str = "--dry-run";

/// The ordered command-line tokens of one run. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    tokens: Vec<String>,
}

impl Invocation {
    pub fn new(tokens: Vec<String>) -> Self {
        Invocation { tokens }
    }

    fn find_prefixed(&self, prefix: &str) -> Option<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .find(|token| token.starts_with(prefix))
    }

    fn has_flag(&self, flag: &str) -> bool {
        self.find_prefixed(flag).is_some()
    }

    /// The value of the first `version=<value>` token.
    ///
    /// The value stops at the next `=`, so `version=1.0.0=x` yields `1.0.0`.
    pub fn explicit_version(&self) -> Option<&str> {
        self.find_prefixed(EXPLICIT_PREFIX).map(|token| {
            let value = &token[EXPLICIT_PREFIX.len()..];
            value.split('=').next().unwrap_or_default()
        })
    }

    /// The strongest bump flag present: major, then minor, then patch.
    pub fn bump(&self) -> Option<VersionBump> {
        if self.has_flag(MAJOR_FLAG) {
            Some(VersionBump::Major)
        } else if self.has_flag(MINOR_FLAG) {
            Some(VersionBump::Minor)
        } else if self.has_flag(PATCH_FLAG) {
            Some(VersionBump::Patch)
        } else {
            None
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.has_flag(DRY_RUN_FLAG)
    }
}

impl<S: Into<String>> FromIterator<S> for Invocation {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Invocation::new(iter.into_iter().map(Into::into).collect())
    }
}
