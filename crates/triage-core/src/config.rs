use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

pub const DEFAULT_CONTEXT_WINDOW: usize = 100;
pub const DEFAULT_MAX_LINE_LENGTH: usize = 500;
pub const DEFAULT_CONTEXT_LINES: usize = 2;
pub const DEFAULT_TRUNCATION_WINDOW: usize = 100;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub compressor: CompressorConfig,
}

impl TriageConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: TriageConfig = serde_json::from_str(raw)?;
        config.compressor.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Characters captured before/after a match.
    #[serde(default = "default_context_window")]
    pub context_window: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressorConfig {
    #[serde(default)]
    pub target_tokens: Option<usize>,
    #[serde(default)]
    pub target_size_mb: Option<f64>,
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    /// Lines of context kept around each important line.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
    /// Characters kept on each side of the important hit in a truncated line.
    #[serde(default = "default_truncation_window")]
    pub truncation_window: usize,
}

impl CompressorConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(mb) = self.target_size_mb {
            if !mb.is_finite() || mb < 0.0 {
                return Err(TriageError::InvalidConfig(format!(
                    "target_size_mb must be a finite non-negative number, got {mb}"
                )));
            }
        }
        if self.max_line_length == 0 {
            return Err(TriageError::InvalidConfig(
                "max_line_length must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn target_size_bytes(&self) -> Option<usize> {
        self.target_size_mb.map(|mb| (mb * BYTES_PER_MB) as usize)
    }
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            target_tokens: None,
            target_size_mb: None,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            context_lines: DEFAULT_CONTEXT_LINES,
            truncation_window: DEFAULT_TRUNCATION_WINDOW,
        }
    }
}

fn default_context_window() -> usize {
    DEFAULT_CONTEXT_WINDOW
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_context_lines() -> usize {
    DEFAULT_CONTEXT_LINES
}

fn default_truncation_window() -> usize {
    DEFAULT_TRUNCATION_WINDOW
}
