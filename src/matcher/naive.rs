//! Naive quadratic substring search.
//!
//! Checks every start offset in turn. O(|text| * |pattern|) worst case;
//! useful as a baseline and as a correctness oracle for the linear-time
//! matchers.

/// Find all start offsets (in chars) where `pattern` occurs in `text`.
///
/// An empty pattern matches nothing.
pub fn find_all(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let mut positions = Vec::new();

    if pattern.is_empty() || pattern.len() > text.len() {
        return positions;
    }

    for start in 0..=(text.len() - pattern.len()) {
        if text[start..start + pattern.len()] == pattern[..] {
            positions.push(start);
        }
    }
    positions
}
