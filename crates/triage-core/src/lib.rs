//! Shared model for the CI failure triage engine.
//!
//! Holds the pattern/match data types consumed by `triage-matcher`, the
//! configuration consumed by both leaves, and the diagnostics sink used to
//! report recoverable problems without failing the caller.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod text;
pub mod types;

pub use config::{CompressorConfig, MatcherConfig, TriageConfig};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink, Warning};
pub use error::{Result, TriageError};
pub use types::{Match, MatchType, Pattern, PatternBuilder};

#[cfg(test)]
mod tests;
