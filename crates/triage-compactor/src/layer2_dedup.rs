//! Layer 2: consolidate lines that normalize to the same key.

use crate::classify;
use crate::normalize::normalize_line;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    pub lines: Vec<String>,
    /// Occurrences dropped in favour of their first copy.
    pub removed: usize,
    /// Dropped occurrences that look like progress output.
    pub progress_removed: usize,
}

/// Keep the first occurrence of each key, annotated with its repeat count.
pub fn compress(lines: &[&str]) -> DedupOutcome {
    let mut first_index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<usize> = Vec::new();
    let mut out = DedupOutcome::default();

    for line in lines {
        let key = normalize_line(line);
        if let Some(&idx) = first_index.get(&key) {
            counts[idx] += 1;
            out.removed += 1;
            if classify::is_progress(line) {
                out.progress_removed += 1;
            }
            continue;
        }
        first_index.insert(key, out.lines.len());
        counts.push(1);
        out.lines.push(line.to_string());
    }

    for (line, &count) in out.lines.iter_mut().zip(&counts) {
        if count > 1 {
            line.push_str(&format!(" (repeated {count} times)"));
        }
    }
    out
}
