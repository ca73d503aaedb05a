//! Dedup keys: volatile substrings rewritten to fixed placeholders.

use regex::Regex;
use std::sync::LazyLock;

static RE_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[?\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?Z?\]?").unwrap()
});
static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());
static RE_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(^|\s)/\S+").unwrap());

/// Normalize a line so structurally identical lines compare equal.
///
/// Idempotent: no placeholder contains a digit or a `/`.
pub fn normalize_line(line: &str) -> String {
    let out = RE_TIMESTAMP.replace_all(line, "[TIMESTAMP]");
    let out = RE_NUMBER.replace_all(&out, "[NUMBER]");
    let out = RE_PATH.replace_all(&out, "${1}[PATH]");
    out.trim().to_string()
}
