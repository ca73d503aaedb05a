//! Layer 5: keep the highest-importance lines that fit a byte budget.

use crate::importance::calculate_line_importance;
use std::cmp::Ordering;

/// Bytes per token assumed when only a token budget is given.
pub const CHARS_PER_TOKEN: usize = 4;

/// Keep roughly `target_size` bytes worth of the most important lines, in
/// their original order. A log already within budget is returned unchanged.
pub fn compress(lines: Vec<String>, target_size: usize) -> Vec<String> {
    let current_size = joined_len(&lines);
    if current_size <= target_size {
        return lines;
    }
    let keep = (lines.len() as u128 * target_size as u128 / current_size as u128) as usize;
    select_top_lines(lines, keep)
}

/// The `keep` highest-scoring lines (ties favour earlier lines), restored
/// to original order.
pub fn select_top_lines<S: AsRef<str>>(lines: Vec<S>, keep: usize) -> Vec<S> {
    let scores: Vec<f64> = lines
        .iter()
        .map(|l| calculate_line_importance(l.as_ref()))
        .collect();
    let mut order: Vec<usize> = (0..lines.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let mut chosen = vec![false; lines.len()];
    for &idx in order.iter().take(keep) {
        chosen[idx] = true;
    }
    lines
        .into_iter()
        .zip(chosen)
        .filter_map(|(line, c)| c.then_some(line))
        .collect()
}

/// Byte length of the lines once joined with `'\n'`.
pub fn joined_len<S: AsRef<str>>(lines: &[S]) -> usize {
    let bytes: usize = lines.iter().map(|l| l.as_ref().len()).sum();
    bytes + lines.len().saturating_sub(1)
}
