//! Failure-signature matcher: scores regex and keyword hits of known CI
//! failure patterns inside raw log text.

pub mod cache;
pub mod scoring;
pub mod types;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use triage_core::text;
use triage_core::{DiagnosticSink, Match, MatchType, MatcherConfig, Pattern, TracingSink};

pub use cache::RegexCache;
pub use types::MatchSummary;

/// Scores occurrences of failure patterns in log text.
///
/// Never fails on input: bad regexes are reported to the sink and skipped.
pub struct PatternMatcher {
    context_window: usize,
    cache: Arc<RegexCache>,
    sink: Arc<dyn DiagnosticSink>,
}

impl PatternMatcher {
    pub fn new(context_window: usize) -> Self {
        Self {
            context_window,
            cache: Arc::new(RegexCache::new()),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn from_config(config: &MatcherConfig) -> Self {
        Self::new(config.context_window)
    }

    /// Share a compiled-regex cache with other matchers.
    pub fn with_cache(mut self, cache: Arc<RegexCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn context_window(&self) -> usize {
        self.context_window
    }

    pub fn cache(&self) -> &Arc<RegexCache> {
        &self.cache
    }

    /// Every non-overlapping regex occurrence of every pattern.
    pub fn match_regex_patterns(&self, text: &str, patterns: &[Pattern]) -> Vec<Match> {
        let mut matches = Vec::new();
        for pattern in patterns.iter().filter(|p| !p.regex_patterns.is_empty()) {
            let regexes = self.cache.get_or_compile(pattern, self.sink.as_ref());
            for re in regexes.iter() {
                let has_groups = re.captures_len() > 1;
                for m in re.find_iter(text) {
                    if m.start() == m.end() {
                        continue;
                    }
                    let confidence = scoring::regex_confidence(
                        text,
                        m.start(),
                        m.end(),
                        has_groups,
                        pattern,
                        self.context_window,
                    );
                    let (context_before, context_after) = self.extract_error_context(text, m.start());
                    matches.push(Match {
                        pattern_id: pattern.id.clone(),
                        match_type: MatchType::Regex,
                        start_position: m.start(),
                        end_position: m.end(),
                        matched_text: m.as_str().to_string(),
                        confidence,
                        context_before,
                        context_after,
                    });
                }
            }
        }
        tracing::debug!(patterns = patterns.len(), matches = matches.len(), "regex matching done");
        matches
    }

    /// At most one keyword match per pattern: the best-scoring first
    /// occurrence among its keywords.
    pub fn match_keyword_patterns(&self, text: &str, patterns: &[Pattern]) -> Vec<Match> {
        // Offsets found in the folded text must be valid in `text`.
        let ascii_only = !lowercase_keeps_offsets(text);
        let lowered = if ascii_only {
            text.to_ascii_lowercase()
        } else {
            text.to_lowercase()
        };

        let mut matches = Vec::new();
        for pattern in patterns.iter().filter(|p| !p.keywords.is_empty()) {
            let mut best: Option<(f64, usize, usize)> = None;
            for keyword in &pattern.keywords {
                let needle = if ascii_only {
                    keyword.to_ascii_lowercase()
                } else {
                    keyword.to_lowercase()
                };
                if needle.is_empty() {
                    continue;
                }
                let Some(pos) = lowered.find(&needle) else {
                    continue;
                };
                let score = scoring::keyword_score(&lowered, pos, &needle);
                if best.map_or(true, |(top, _, _)| score > top) {
                    best = Some((score, pos, pos + needle.len()));
                }
            }

            if let Some((confidence, start, end)) = best {
                let matched_text = &text[start..end];
                let (context_before, context_after) = self.extract_error_context(text, start);
                matches.push(Match {
                    pattern_id: pattern.id.clone(),
                    match_type: MatchType::Keyword,
                    start_position: start,
                    end_position: end,
                    matched_text: matched_text.to_string(),
                    confidence,
                    context_before,
                    context_after,
                });
            }
        }
        matches
    }

    /// Regex and keyword matches together, highest confidence first.
    pub fn match_patterns(&self, text: &str, patterns: &[Pattern]) -> Vec<Match> {
        let mut matches = self.match_regex_patterns(text, patterns);
        matches.extend(self.match_keyword_patterns(text, patterns));
        sort_by_confidence(&mut matches);
        matches
    }

    /// Trimmed text up to `context_window` characters either side of `position`.
    pub fn extract_error_context(&self, text: &str, position: usize) -> (String, String) {
        let position = text::floor_boundary(text, position);
        let start = text::back_chars(text, position, self.context_window);
        let end = text::forward_chars(text, position, self.context_window);
        (
            text[start..position].trim().to_string(),
            text[position..end].trim().to_string(),
        )
    }

    pub fn calculate_match_strength(&self, m: &Match) -> f64 {
        match m.match_type {
            MatchType::Regex | MatchType::Keyword => m.confidence,
            MatchType::Custom(_) => 0.0,
        }
    }

    pub fn get_match_summary(&self, matches: &[Match]) -> MatchSummary {
        summarize(matches)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::from_config(&MatcherConfig::default())
    }
}

/// Build a [`MatchSummary`]; an empty slice yields the zeroed default.
pub fn summarize(matches: &[Match]) -> MatchSummary {
    if matches.is_empty() {
        return MatchSummary::default();
    }

    let mut summary = MatchSummary {
        total_matches: matches.len(),
        highest_confidence: f64::MIN,
        lowest_confidence: f64::MAX,
        ..Default::default()
    };
    let mut seen = HashSet::new();
    let mut total_confidence = 0.0;

    for m in matches {
        match m.match_type {
            MatchType::Regex => summary.regex_matches += 1,
            MatchType::Keyword => summary.keyword_matches += 1,
            MatchType::Custom(_) => summary.custom_matches += 1,
        }
        total_confidence += m.confidence;
        summary.highest_confidence = summary.highest_confidence.max(m.confidence);
        summary.lowest_confidence = summary.lowest_confidence.min(m.confidence);
        if seen.insert(m.pattern_id.as_str()) {
            summary.patterns_matched.push(m.pattern_id.clone());
        }
    }
    summary.average_confidence = total_confidence / matches.len() as f64;
    summary
}

/// Highest-confidence match per pattern id, best first.
pub fn best_match_per_pattern(matches: &[Match]) -> Vec<Match> {
    let mut best: Vec<Match> = Vec::new();
    for m in matches {
        match best.iter_mut().find(|b| b.pattern_id == m.pattern_id) {
            Some(existing) if m.confidence > existing.confidence => *existing = m.clone(),
            Some(_) => {}
            None => best.push(m.clone()),
        }
    }
    sort_by_confidence(&mut best);
    best
}

pub fn filter_by_confidence(matches: Vec<Match>, min_confidence: f64) -> Vec<Match> {
    matches
        .into_iter()
        .filter(|m| m.confidence >= min_confidence)
        .collect()
}

/// Every char lower-cases to exactly one char of the same UTF-8 width.
fn lowercase_keeps_offsets(text: &str) -> bool {
    text.chars().all(|c| {
        let mut folded = c.to_lowercase();
        matches!((folded.next(), folded.next()), (Some(l), None) if l.len_utf8() == c.len_utf8())
    })
}

fn sort_by_confidence(matches: &mut [Match]) {
    matches.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal));
}
