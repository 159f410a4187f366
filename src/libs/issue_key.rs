//! Issue key extraction from Toggl entry titles.
//!
//! A title must start with a Jira issue key. Whatever follows the key is
//! ignored: `AB-123`, `AB-123 fix login redirect` and `AB-123: review` all
//! resolve to `AB-123`.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Leading issue key (ASCII word characters, `-`, digits), then anything.
pub const ISSUE_KEY_PATTERN: &str = r"^([0-9A-Za-z_]+-[0-9]+) ?.*$";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IssueKeyError {
    #[error("Toggl log name is not valid: \"{0}\", expected format is \"AB-123\" or \"AB-123 text\"")]
    NoMatch(String),
}

fn issue_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ISSUE_KEY_PATTERN).expect("issue key pattern is valid"))
}

/// Returns the issue key a title starts with.
///
/// ```rust
/// use toggl_jira_worklog::libs::issue_key::extract;
///
/// assert_eq!(extract("AB-123 fix bug").unwrap(), "AB-123");
/// assert!(extract("lunch").is_err());
/// ```
pub fn extract(title: &str) -> Result<&str, IssueKeyError> {
    issue_key_regex()
        .captures(title)
        .and_then(|captures| captures.get(1))
        .map(|key| key.as_str())
        .ok_or_else(|| IssueKeyError::NoMatch(title.to_string()))
}
