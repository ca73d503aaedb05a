//! Static line classifiers shared by the pipeline stages.

use regex::{Regex, RegexSet};
use std::sync::LazyLock;

/// Diagnostic signals, in priority order for locating the important part
/// of a line.
const IMPORTANT: &[&str] = &[
    r"error",
    r"fail",
    r"exception",
    r"traceback",
    r"warning",
    r"critical",
    r"fatal",
    r"denied",
    r"timeout",
    r"timed out",
    r"not found",
    r"permission",
    r"module\s*not\s*found",
    r"import\s*error",
    r"syntax\s*error",
    r"connection\s+(?:refused|reset|error)",
    r"network\s+(?:error|unreachable)",
];

const REMOVABLE: &[&str] = &[
    r"^\s*$",
    r"^\s*#",
    r"^\s*//",
    r"^\s*\*",
    r"(?i)^\s*\[?(?:debug|info|trace|verbose)\b",
    r"(?i)^\s*\[?\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?Z?\]?\s+\[?info\b",
];

const PROGRESS: &[&str] = &[
    r"\b\d{1,3}(?:\.\d+)?%",
    r"(?i)\bprogress\b",
    r"(?i)^\s*(?:downloading|extracting|pulling|uploading)\b",
    r"^\s*\.{3,}\s*$",
    r"\[[=#\-]*>?\s*\]",
];

static IMPORTANT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    IMPORTANT
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
});
static IMPORTANT_SET: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(IMPORTANT.iter().map(|p| format!("(?i){p}"))).unwrap());
static REMOVABLE_SET: LazyLock<RegexSet> = LazyLock::new(|| RegexSet::new(REMOVABLE).unwrap());
static PROGRESS_SET: LazyLock<RegexSet> = LazyLock::new(|| RegexSet::new(PROGRESS).unwrap());

pub fn is_important(line: &str) -> bool {
    IMPORTANT_SET.is_match(line)
}

/// Byte range of the first important signal, by signal priority.
pub fn first_important(line: &str) -> Option<(usize, usize)> {
    IMPORTANT_RES
        .iter()
        .find_map(|re| re.find(line))
        .map(|m| (m.start(), m.end()))
}

/// Noise that can go unless it is also important.
pub fn is_removable(line: &str) -> bool {
    REMOVABLE_SET.is_match(line)
}

/// Progress bars, percentages and dot spam.
pub fn is_progress(line: &str) -> bool {
    PROGRESS_SET.is_match(line)
}
