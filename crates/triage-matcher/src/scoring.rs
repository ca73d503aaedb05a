//! Confidence heuristics for regex and keyword hits.

use triage_core::text;
use triage_core::Pattern;

const REGEX_BASE: f64 = 0.7;
const LONG_MATCH_CHARS: usize = 20;
const SHORT_MATCH_CHARS: usize = 5;
const LENGTH_ADJUST: f64 = 0.1;
const GROUP_BONUS: f64 = 0.1;

const KEYWORD_BASE: f64 = 0.5;
const WORD_BOUNDARY_BONUS: f64 = 0.2;
const LONG_KEYWORD_CHARS: usize = 5;
const LONG_KEYWORD_BONUS: f64 = 0.1;

/// Score one regex occurrence spanning `[start, end)` of `text`.
pub fn regex_confidence(
    text: &str,
    start: usize,
    end: usize,
    has_groups: bool,
    pattern: &Pattern,
    context_window: usize,
) -> f64 {
    let mut base = REGEX_BASE;

    let matched_chars = text::char_len(&text[start..end]);
    if matched_chars > LONG_MATCH_CHARS {
        base += LENGTH_ADJUST;
    } else if matched_chars < SHORT_MATCH_CHARS {
        base -= LENGTH_ADJUST;
    }

    if has_groups {
        base += GROUP_BONUS;
    }

    if !pattern.context_requirements.is_empty() {
        let around = text::window(text, start, end, context_window.saturating_mul(2));
        let context_score = fraction_present(around, &pattern.context_requirements);
        base *= 0.5 + 0.5 * context_score;
    }

    if !pattern.keywords.is_empty() {
        let around = text::window(text, start, end, context_window);
        let keyword_score = fraction_present(around, &pattern.keywords);
        base = base * 0.7 + 0.3 * keyword_score;
    }

    base.clamp(0.0, 1.0)
}

/// Fraction of `needles` found case-insensitively in `haystack`.
pub fn fraction_present(haystack: &str, needles: &[String]) -> f64 {
    if needles.is_empty() {
        return 0.0;
    }
    let haystack = haystack.to_lowercase();
    let found = needles
        .iter()
        .filter(|n| haystack.contains(n.to_lowercase().as_str()))
        .count();
    found as f64 / needles.len() as f64
}

/// Score a keyword found at byte `pos` of the (lower-cased) `text`.
pub fn keyword_score(text: &str, pos: usize, keyword: &str) -> f64 {
    let mut score = KEYWORD_BASE;
    if is_word_boundary(text, pos, pos + keyword.len()) {
        score += WORD_BOUNDARY_BONUS;
    }
    if text::char_len(keyword) > LONG_KEYWORD_CHARS {
        score += LONG_KEYWORD_BONUS;
    }
    score.min(1.0)
}

/// Neither neighbour of `[start, end)` is a word character.
pub fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
