//! Compiled-regex cache keyed by pattern id.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use regex::{Regex, RegexBuilder};
use triage_core::{DiagnosticSink, Pattern, TriageError, Warning};

/// Lazily populated map of pattern id -> compiled regex variants.
///
/// Variants that fail to compile are reported once and left out of the
/// cached list, so they stay excluded until [`RegexCache::clear`].
#[derive(Debug, Default)]
pub struct RegexCache {
    compiled: RwLock<HashMap<String, Arc<Vec<Regex>>>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiled variants for `pattern`, compiling on first use.
    pub fn get_or_compile(&self, pattern: &Pattern, sink: &dyn DiagnosticSink) -> Arc<Vec<Regex>> {
        if let Some(hit) = self.compiled.read().get(&pattern.id) {
            return Arc::clone(hit);
        }

        let mut compiled = self.compiled.write();
        // Another caller may have filled the slot between the two locks.
        if let Some(hit) = compiled.get(&pattern.id) {
            return Arc::clone(hit);
        }
        let regexes = Arc::new(compile_variants(pattern, sink));
        compiled.insert(pattern.id.clone(), Arc::clone(&regexes));
        regexes
    }

    pub fn contains(&self, pattern_id: &str) -> bool {
        self.compiled.read().contains_key(pattern_id)
    }

    pub fn len(&self) -> usize {
        self.compiled.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.read().is_empty()
    }

    pub fn clear(&self) {
        self.compiled.write().clear();
    }
}

fn compile_variants(pattern: &Pattern, sink: &dyn DiagnosticSink) -> Vec<Regex> {
    let mut out = Vec::with_capacity(pattern.regex_patterns.len());
    for raw in &pattern.regex_patterns {
        match build_regex(raw) {
            Ok(re) => out.push(re),
            Err(source) => {
                let error = TriageError::InvalidRegex {
                    pattern_id: pattern.id.clone(),
                    source,
                };
                sink.warn(&Warning::RegexSkipped {
                    pattern_id: &pattern.id,
                    regex: raw,
                    error: &error,
                });
            }
        }
    }
    out
}

fn build_regex(raw: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(raw)
        .case_insensitive(true)
        .multi_line(true)
        .dot_matches_new_line(true)
        .build()
}
