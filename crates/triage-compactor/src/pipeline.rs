//! Compression pipeline: runs the five layers in order.

use crate::layer5_budget::CHARS_PER_TOKEN;
use crate::stats::{get_compression_statistics, ratio, CompressionStatistics};
use crate::{layer1_noise, layer2_dedup, layer3_importance, layer4_truncate, layer5_budget, sampling, split_lines};
use serde::{Deserialize, Serialize};
use triage_core::{CompressorConfig, Result};

/// Token budget used when preparing a log for model analysis.
pub const DEFAULT_AI_MAX_TOKENS: usize = 8000;

/// What a single `compress` call did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub original_size: usize,
    pub compressed_size: usize,
    pub compression_ratio: f64,
    pub lines_removed: usize,
    pub lines_kept: usize,
    /// Tags of the stages that ran, in order.
    pub techniques_applied: Vec<String>,
    /// Dropped duplicates that looked like progress output.
    pub progress_lines_deduplicated: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressedLog {
    pub text: String,
    pub result: CompressionResult,
}

/// Shrinks CI logs while keeping diagnostic lines.
#[derive(Debug, Clone, Default)]
pub struct LogCompressor {
    config: CompressorConfig,
}

impl LogCompressor {
    pub fn new(target_tokens: Option<usize>, target_size_mb: Option<f64>) -> Self {
        Self {
            config: CompressorConfig {
                target_tokens,
                target_size_mb,
                ..Default::default()
            },
        }
    }

    pub fn from_config(config: CompressorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_target_tokens(tokens: usize) -> Self {
        Self::new(Some(tokens), None)
    }

    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Byte budget for layer 5, if any. An explicit size wins over tokens.
    pub fn target_size(&self) -> Option<usize> {
        self.config
            .target_size_bytes()
            .or_else(|| self.config.target_tokens.map(|t| t.saturating_mul(CHARS_PER_TOKEN)))
    }

    /// Compress `text`, returning the output and what each stage did.
    pub fn compress(&self, text: &str) -> CompressedLog {
        if text.is_empty() {
            return CompressedLog::default();
        }

        let original = split_lines(text);
        let mut techniques = Vec::new();

        let (survivors, noise_removed) = layer1_noise::compress(&original);
        if noise_removed > 0 {
            techniques.push(format!("low_priority_removal({noise_removed})"));
        }
        tracing::debug!(removed = noise_removed, kept = survivors.len(), "noise removal");

        let dedup = layer2_dedup::compress(&survivors);
        if dedup.removed > 0 {
            techniques.push(format!("duplicate_removal({})", dedup.removed));
        }
        tracing::debug!(removed = dedup.removed, kept = dedup.lines.len(), "dedup");

        let mut lines = layer3_importance::compress(dedup.lines, self.config.context_lines);
        techniques.push("importance_filtering".to_string());
        tracing::debug!(kept = lines.len(), "importance filtering");

        lines = layer4_truncate::compress(
            lines,
            self.config.max_line_length,
            self.config.truncation_window,
        );
        techniques.push("line_truncation".to_string());

        if let Some(target) = self.target_size() {
            lines = layer5_budget::compress(lines, target);
            techniques.push("target_size_compression".to_string());
            tracing::debug!(target, kept = lines.len(), "budget selection");
        }

        let lines_kept = lines.len();
        let output = lines.join("\n");
        let result = CompressionResult {
            original_size: text.len(),
            compressed_size: output.len(),
            compression_ratio: ratio(output.len(), text.len()),
            lines_removed: original.len().saturating_sub(lines_kept),
            lines_kept,
            techniques_applied: techniques,
            progress_lines_deduplicated: dedup.progress_removed,
        };
        CompressedLog { text: output, result }
    }

    pub fn compress_log(&self, text: &str) -> String {
        self.compress(text).text
    }

    pub fn calculate_line_importance(&self, line: &str) -> f64 {
        crate::importance::calculate_line_importance(line)
    }

    pub fn smart_log_sampling(&self, text: &str, sample_ratio: f64) -> String {
        sampling::smart_log_sampling(text, sample_ratio)
    }

    pub fn get_compression_statistics(&self, original: &str, compressed: &str) -> CompressionStatistics {
        get_compression_statistics(original, compressed)
    }
}

/// Compress a log to `max_tokens` and report the savings.
pub fn compress_log_for_ai_analysis(text: &str, max_tokens: usize) -> (String, CompressionStatistics) {
    let compressed = LogCompressor::with_target_tokens(max_tokens).compress_log(text);
    let stats = get_compression_statistics(text, &compressed);
    (compressed, stats)
}
