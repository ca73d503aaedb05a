//! Log compactor: shrinks CI logs to a size/token budget while keeping
//! the lines that explain a failure.
//!
//! Stages, each fed the previous stage's output:
//! 1. Noise removal (blank, comment and low-severity lines)
//! 2. Dedup: lines equal after timestamp/number/path normalization
//! 3. Importance filtering: important lines plus surrounding context
//! 4. Line truncation: long lines cut around their important part
//! 5. Budget selection: highest-scoring lines up to a byte/token target

pub mod classify;
pub mod importance;
pub mod layer1_noise;
pub mod layer2_dedup;
pub mod layer3_importance;
pub mod layer4_truncate;
pub mod layer5_budget;
pub mod normalize;
pub mod pipeline;
pub mod sampling;
pub mod stats;

pub use importance::calculate_line_importance;
pub use normalize::normalize_line;
pub use pipeline::{compress_log_for_ai_analysis, CompressedLog, CompressionResult, LogCompressor};
pub use stats::{estimate_tokens, get_compression_statistics, CompressionStatistics};

/// Split on `'\n'`; empty text has no lines.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}
