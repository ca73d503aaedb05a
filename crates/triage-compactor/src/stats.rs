//! Before/after statistics for a compressed log.

use crate::layer5_budget::CHARS_PER_TOKEN;
use crate::split_lines;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompressionStatistics {
    pub original_size: usize,
    pub compressed_size: usize,
    /// Negative when the output grew.
    pub size_reduction: i64,
    pub size_reduction_percent: f64,
    pub original_lines: usize,
    pub compressed_lines: usize,
    pub lines_reduction: i64,
    pub lines_reduction_percent: f64,
    pub compression_ratio: f64,
    pub estimated_tokens_saved: i64,
}

/// Rough token count at four bytes per token.
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / CHARS_PER_TOKEN
}

pub fn get_compression_statistics(original: &str, compressed: &str) -> CompressionStatistics {
    let original_size = original.len();
    let compressed_size = compressed.len();
    let original_lines = split_lines(original).len();
    let compressed_lines = split_lines(compressed).len();

    let size_reduction = original_size as i64 - compressed_size as i64;
    let lines_reduction = original_lines as i64 - compressed_lines as i64;

    CompressionStatistics {
        original_size,
        compressed_size,
        size_reduction,
        size_reduction_percent: percent(size_reduction, original_size),
        original_lines,
        compressed_lines,
        lines_reduction,
        lines_reduction_percent: percent(lines_reduction, original_lines),
        compression_ratio: ratio(compressed_size, original_size),
        estimated_tokens_saved: size_reduction.div_euclid(CHARS_PER_TOKEN as i64),
    }
}

fn percent(reduction: i64, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    reduction as f64 / total as f64 * 100.0
}

pub(crate) fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}
