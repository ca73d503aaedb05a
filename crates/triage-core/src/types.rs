use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named failure signature: regex and keyword families plus metadata.
///
/// Loaded by the pattern library and treated as immutable while matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub regex_patterns: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub context_requirements: Vec<String>,
    #[serde(default = "default_confidence_base")]
    pub confidence_base: f64,
    #[serde(default)]
    pub success_rate: f64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub user_defined: bool,
}

fn default_confidence_base() -> f64 {
    0.5
}

impl Pattern {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            regex_patterns: Vec::new(),
            keywords: Vec::new(),
            context_requirements: Vec::new(),
            confidence_base: default_confidence_base(),
            success_rate: 0.0,
            created_at: now,
            updated_at: now,
            user_defined: false,
        }
    }

    pub fn builder(id: impl Into<String>) -> PatternBuilder {
        let id = id.into();
        PatternBuilder {
            pattern: Pattern::new(id.clone(), id, "general"),
        }
    }

    /// A pattern with neither regexes nor keywords can never match.
    pub fn is_matchable(&self) -> bool {
        !self.regex_patterns.is_empty() || !self.keywords.is_empty()
    }
}

/// Fluent constructor for [`Pattern`].
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    pattern: Pattern,
}

impl PatternBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.pattern.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.pattern.category = category.into();
        self
    }

    pub fn regex(mut self, regex: impl Into<String>) -> Self {
        self.pattern.regex_patterns.push(regex.into());
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.pattern.keywords.push(keyword.into());
        self
    }

    pub fn context_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.pattern.context_requirements.push(requirement.into());
        self
    }

    pub fn confidence_base(mut self, value: f64) -> Self {
        self.pattern.confidence_base = value.clamp(0.0, 1.0);
        self
    }

    pub fn success_rate(mut self, value: f64) -> Self {
        self.pattern.success_rate = value.clamp(0.0, 1.0);
        self
    }

    pub fn user_defined(mut self, user_defined: bool) -> Self {
        self.pattern.user_defined = user_defined;
        self
    }

    pub fn build(self) -> Pattern {
        self.pattern
    }
}

/// How a match was produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Regex,
    Keyword,
    /// Produced by a matcher outside this crate family.
    Custom(String),
}

impl MatchType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Regex => "regex",
            Self::Keyword => "keyword",
            Self::Custom(kind) => kind.as_str(),
        }
    }
}

/// A single scored occurrence of a pattern in log text.
///
/// Positions are byte offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub pattern_id: String,
    pub match_type: MatchType,
    pub start_position: usize,
    pub end_position: usize,
    pub matched_text: String,
    pub confidence: f64,
    pub context_before: String,
    pub context_after: String,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end_position.saturating_sub(self.start_position)
    }

    pub fn is_empty(&self) -> bool {
        self.end_position <= self.start_position
    }
}
