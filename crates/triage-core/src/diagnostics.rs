//! Injected warning sink.
//!
//! Matching and compression never fail on dirty input; problems that a
//! caller may still want to see (a pattern regex that does not compile) are
//! reported here instead.

use crate::error::TriageError;

/// A recoverable problem noticed while processing input.
#[derive(Debug)]
pub enum Warning<'a> {
    /// A regex variant was dropped from a pattern's compiled set.
    RegexSkipped {
        pattern_id: &'a str,
        regex: &'a str,
        error: &'a TriageError,
    },
}

pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, warning: &Warning<'_>);
}

/// Forwards warnings to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, warning: &Warning<'_>) {
        match warning {
            Warning::RegexSkipped { pattern_id, regex, error } => {
                tracing::warn!(%pattern_id, %regex, %error, "skipping invalid pattern regex");
            }
        }
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _warning: &Warning<'_>) {}
}
