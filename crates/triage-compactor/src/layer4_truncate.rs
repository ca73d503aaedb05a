//! Layer 4: Line truncation.

use crate::classify;
use triage_core::text;

const ELLIPSIS: &str = "...";

/// Shorten a line longer than `max_length` characters.
///
/// Important lines keep `window` characters around their first important
/// signal; other lines keep their first `max_length` characters.
pub fn truncate_line(line: &str, max_length: usize, window: usize) -> String {
    if text::char_len(line) <= max_length {
        return line.to_string();
    }

    if let Some((hit_start, hit_end)) = classify::first_important(line) {
        let start = text::back_chars(line, hit_start, window);
        let end = text::forward_chars(line, hit_end, window);
        let mut out = String::with_capacity(end - start + 2 * ELLIPSIS.len());
        if start > 0 {
            out.push_str(ELLIPSIS);
        }
        out.push_str(&line[start..end]);
        if end < line.len() {
            out.push_str(ELLIPSIS);
        }
        return out;
    }

    let cut = text::forward_chars(line, 0, max_length);
    format!("{}{}", &line[..cut], ELLIPSIS)
}

pub fn compress(lines: Vec<String>, max_length: usize, window: usize) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if text::char_len(&line) > max_length {
                truncate_line(&line, max_length, window)
            } else {
                line
            }
        })
        .collect()
}
