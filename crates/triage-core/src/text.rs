//! Character windows over UTF-8 text.
//!
//! Windows are sized in characters but returned as byte offsets that always
//! land on a char boundary, so slicing with them never panics.

/// Largest char boundary `<= pos`.
pub fn floor_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Smallest char boundary `>= pos`.
pub fn ceil_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

/// Byte offset `chars` characters before `pos` (clamped to 0).
pub fn back_chars(text: &str, pos: usize, chars: usize) -> usize {
    let pos = floor_boundary(text, pos);
    if chars == 0 {
        return pos;
    }
    text[..pos]
        .char_indices()
        .rev()
        .nth(chars - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset `chars` characters after `pos` (clamped to the text length).
pub fn forward_chars(text: &str, pos: usize, chars: usize) -> usize {
    let pos = ceil_boundary(text, pos);
    text[pos..]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Slice of `text` spanning `margin` characters around `[start, end)`.
pub fn window(text: &str, start: usize, end: usize, margin: usize) -> &str {
    let from = back_chars(text, start, margin);
    let to = forward_chars(text, end, margin);
    if from >= to {
        return "";
    }
    &text[from..to]
}

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
