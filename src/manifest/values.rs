//! Line-oriented update of the Helm values file.

use std::sync::OnceLock;

use regex::Regex;

/// First line that starts with `version:`, without its line terminator.
const VERSION_LINE: &str = r"(?m)^version:[^\r\n]*";

fn version_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_LINE).expect("version line pattern is valid"))
}

/// Replaces the first `version:` line with `version: <version>`.
///
/// Every other byte of `content` is kept as is. Returns `None` when no line
/// starts with `version:`; indented keys such as `  version:` or keys like
/// `appVersion:` never match.
pub fn replace_version_line(content: &str, version: &str) -> Option<String> {
    version_line().find(content).map(|m| {
        format!(
            "{}version: {}{}",
            &content[..m.start()],
            version,
            &content[m.end()..]
        )
    })
}

/// The value currently on the first `version:` line, trimmed.
pub fn current_version(content: &str) -> Option<String> {
    version_line().find(content).map(|m| {
        m.as_str()["version:".len()..]
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string()
    })
}
