//! Per-line diagnostic value heuristic.

use crate::classify;
use regex::Regex;
use std::sync::LazyLock;
use triage_core::text;

const IMPORTANT_BONUS: f64 = 0.8;
const CRITICAL_BONUS: f64 = 0.9;
const ERROR_BONUS: f64 = 0.7;
const WARNING_BONUS: f64 = 0.5;
const INFO_BONUS: f64 = 0.2;
const LONG_LINE_CHARS: usize = 100;
const LONG_LINE_BONUS: f64 = 0.1;
const STACK_FRAME_BONUS: f64 = 0.6;
const FILE_REF_BONUS: f64 = 0.4;

static RE_CRITICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)critical|fatal").unwrap());
static RE_ERROR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)error").unwrap());
static RE_WARNING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)warning").unwrap());
static RE_INFO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)info").unwrap());
static RE_STACK_FRAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)traceback|stack trace|at\s+\w+\.\w+").unwrap());
static RE_FILE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\w+\.(?:py|js|java):\d+").unwrap());

/// Score in `[0, 1]`. Bonuses add up and the sum is capped, so error
/// lines saturate through both the signal and the severity bonus.
pub fn calculate_line_importance(line: &str) -> f64 {
    let mut score = 0.0;

    if classify::is_important(line) {
        score += IMPORTANT_BONUS;
    }

    // At most one severity bonus.
    if RE_CRITICAL.is_match(line) {
        score += CRITICAL_BONUS;
    } else if RE_ERROR.is_match(line) {
        score += ERROR_BONUS;
    } else if RE_WARNING.is_match(line) {
        score += WARNING_BONUS;
    } else if RE_INFO.is_match(line) {
        score += INFO_BONUS;
    }

    if text::char_len(line) > LONG_LINE_CHARS {
        score += LONG_LINE_BONUS;
    }
    if RE_STACK_FRAME.is_match(line) {
        score += STACK_FRAME_BONUS;
    }
    if RE_FILE_REF.is_match(line) {
        score += FILE_REF_BONUS;
    }

    f64::min(score, 1.0)
}
