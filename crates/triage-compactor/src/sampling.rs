//! Importance sampling over the raw, unfiltered log.

use crate::layer5_budget::select_top_lines;
use crate::split_lines;

/// Keep the top `sample_ratio` share of lines by importance, in original
/// order. Unlike the pipeline this sees every line, noise included.
pub fn smart_log_sampling(text: &str, sample_ratio: f64) -> String {
    let lines = split_lines(text);
    let ratio = if sample_ratio.is_nan() { 0.0 } else { sample_ratio.clamp(0.0, 1.0) };
    let keep = (lines.len() as f64 * ratio).floor() as usize;
    select_top_lines(lines, keep).join("\n")
}
