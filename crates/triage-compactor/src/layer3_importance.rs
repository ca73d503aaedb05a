//! Layer 3: keep important lines plus nearby context.

use crate::classify;

/// Keep every important line and up to `context_lines` neighbours on each
/// side; everything else is dropped.
pub fn compress(lines: Vec<String>, context_lines: usize) -> Vec<String> {
    if lines.is_empty() {
        return lines;
    }
    let last = lines.len() - 1;
    let mut keep = vec![false; lines.len()];
    for (i, line) in lines.iter().enumerate() {
        if classify::is_important(line) {
            let from = i.saturating_sub(context_lines);
            let to = i.saturating_add(context_lines).min(last);
            keep[from..=to].iter_mut().for_each(|k| *k = true);
        }
    }
    lines
        .into_iter()
        .zip(keep)
        .filter_map(|(line, k)| k.then_some(line))
        .collect()
}
