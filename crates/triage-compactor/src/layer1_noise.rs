//! Layer 1: drop blank lines, comments and low-severity chatter.

use crate::classify;

/// Keep a line unless it is removable and carries no important signal.
pub fn keep_line(line: &str) -> bool {
    classify::is_important(line) || !classify::is_removable(line)
}

/// Returns the surviving lines and how many were dropped.
pub fn compress<'a>(lines: &[&'a str]) -> (Vec<&'a str>, usize) {
    let kept: Vec<&str> = lines.iter().copied().filter(|l| keep_line(l)).collect();
    let removed = lines.len() - kept.len();
    (kept, removed)
}
