use crate::*;
use crate::text;

// ========== Pattern ==========

#[test]
fn test_pattern_builder() {
    let p = Pattern::builder("npm-missing-module")
        .name("Missing npm module")
        .category("dependency")
        .regex(r"Cannot find module '([^']+)'")
        .keyword("npm")
        .context_requirement("node")
        .confidence_base(1.5)
        .build();
    assert_eq!(p.id, "npm-missing-module");
    assert_eq!(p.category, "dependency");
    assert_eq!(p.regex_patterns.len(), 1);
    assert_eq!(p.keywords, vec!["npm".to_string()]);
    assert!((p.confidence_base - 1.0).abs() < f64::EPSILON);
    assert!(!p.user_defined);
}

#[test]
fn test_pattern_matchable() {
    assert!(!Pattern::new("empty", "Empty", "misc").is_matchable());
    assert!(Pattern::builder("kw").keyword("oom").build().is_matchable());
    assert!(Pattern::builder("re").regex("killed").build().is_matchable());
}

#[test]
fn test_pattern_from_library_json() {
    let raw = r#"{
        "id": "py-import",
        "name": "Python import error",
        "category": "dependency",
        "regex_patterns": ["ModuleNotFoundError: No module named '(\\w+)'"],
        "keywords": ["pip", "requirements"],
        "confidence_base": 0.8,
        "success_rate": 0.6,
        "created_at": "2024-03-01T12:00:00Z",
        "updated_at": "2024-03-02T12:00:00Z",
        "user_defined": true
    }"#;
    let p: Pattern = serde_json::from_str(raw).unwrap();
    assert_eq!(p.id, "py-import");
    assert_eq!(p.keywords.len(), 2);
    assert!(p.context_requirements.is_empty());
    assert!(p.user_defined);
    assert_eq!(p.created_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
}

#[test]
fn test_pattern_json_defaults() {
    let p: Pattern = serde_json::from_str(r#"{"id":"x","name":"X","category":"c"}"#).unwrap();
    assert!(!p.is_matchable());
    assert!(!p.user_defined);
    assert!((p.confidence_base - 0.5).abs() < f64::EPSILON);
}

// ========== Match ==========

#[test]
fn test_match_type_serde() {
    assert_eq!(serde_json::to_string(&MatchType::Regex).unwrap(), "\"regex\"");
    assert_eq!(serde_json::to_string(&MatchType::Keyword).unwrap(), "\"keyword\"");
    assert_eq!(MatchType::Custom("semantic".into()).as_str(), "semantic");
}

#[test]
fn test_match_len() {
    let m = Match {
        pattern_id: "p".into(),
        match_type: MatchType::Regex,
        start_position: 4,
        end_position: 9,
        matched_text: "ERROR".into(),
        confidence: 0.7,
        context_before: String::new(),
        context_after: String::new(),
    };
    assert_eq!(m.len(), 5);
    assert!(!m.is_empty());
}

#[test]
fn test_match_len_inverted_positions() {
    let m = Match {
        pattern_id: "ext".into(),
        match_type: MatchType::Custom("semantic".into()),
        start_position: 9,
        end_position: 4,
        matched_text: String::new(),
        confidence: 0.3,
        context_before: String::new(),
        context_after: String::new(),
    };
    assert_eq!(m.len(), 0);
    assert!(m.is_empty());
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let c = TriageConfig::default();
    assert_eq!(c.matcher.context_window, 100);
    assert_eq!(c.compressor.max_line_length, 500);
    assert_eq!(c.compressor.context_lines, 2);
    assert!(c.compressor.target_tokens.is_none());
    assert!(c.compressor.target_size_bytes().is_none());
}

#[test]
fn test_config_from_json_partial() {
    let c = TriageConfig::from_json(r#"{"compressor":{"target_tokens":8000}}"#).unwrap();
    assert_eq!(c.compressor.target_tokens, Some(8000));
    assert_eq!(c.compressor.max_line_length, 500);
    assert_eq!(c.matcher.context_window, 100);
}

#[test]
fn test_config_target_size_bytes() {
    let c = CompressorConfig { target_size_mb: Some(0.5), ..Default::default() };
    assert_eq!(c.target_size_bytes(), Some(524_288));
}

#[test]
fn test_config_rejects_negative_size() {
    let err = TriageConfig::from_json(r#"{"compressor":{"target_size_mb":-1.0}}"#).unwrap_err();
    assert!(matches!(err, TriageError::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_zero_line_length() {
    let c = CompressorConfig { max_line_length: 0, ..Default::default() };
    assert!(c.validate().is_err());
}

#[test]
fn test_config_bad_json() {
    let err = TriageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, TriageError::Serialization(_)));
}

// ========== Diagnostics ==========

#[test]
fn test_sinks_accept_warnings() {
    let source = regex::Regex::new("(").unwrap_err();
    let error = TriageError::InvalidRegex { pattern_id: "p".into(), source };
    let warning = Warning::RegexSkipped { pattern_id: "p", regex: "(", error: &error };
    TracingSink.warn(&warning);
    NullSink.warn(&warning);
    assert!(error.to_string().contains("pattern p"));
}

// ========== Text windows ==========

#[test]
fn test_window_ascii() {
    let s = "0123456789";
    assert_eq!(text::back_chars(s, 5, 2), 3);
    assert_eq!(text::back_chars(s, 1, 5), 0);
    assert_eq!(text::forward_chars(s, 5, 2), 7);
    assert_eq!(text::forward_chars(s, 9, 5), 10);
    assert_eq!(text::window(s, 4, 6, 1), "3456");
}

#[test]
fn test_window_multibyte() {
    let s = "héllo wörld";
    let end = text::forward_chars(s, 0, 2);
    assert_eq!(&s[..end], "hé");
    let start = text::back_chars(s, s.len(), 5);
    assert_eq!(&s[start..], "wörld");
    assert_eq!(text::floor_boundary(s, 2), 1);
    assert_eq!(text::ceil_boundary(s, 2), 3);
}

#[test]
fn test_back_zero_chars() {
    assert_eq!(text::back_chars("abc", 2, 0), 2);
    assert_eq!(text::char_len("añb"), 3);
}
