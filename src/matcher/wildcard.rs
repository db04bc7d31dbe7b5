//! Single-pattern search with an any-symbol wildcard.
//!
//! Classic prefix-function (Knuth-Morris-Pratt) matching where one
//! designated symbol in the *pattern* matches any single text symbol.
//! The wildcard is honored both while building the prefix table and
//! while scanning, so `"a*c"` matches `"abc"`, `"axc"`, and so on.
//!
//! # Examples
//!
//! ```
//! use yari::matcher::wildcard::WildcardMatcher;
//!
//! let matcher = WildcardMatcher::new("a*c");
//! assert_eq!(matcher.find_all("abcaxc"), vec![0, 3]);
//! ```

/// The default wildcard symbol.
pub const DEFAULT_WILDCARD: char = '*';

/// A compiled single-pattern matcher with wildcard support.
///
/// The prefix table is computed once at construction; each call to
/// [`find_all`](WildcardMatcher::find_all) runs in O(|text|).
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    source: String,
    pattern: Vec<char>,
    wildcard: char,
    prefix_table: Vec<usize>,
}

impl WildcardMatcher {
    /// Create a matcher using [`DEFAULT_WILDCARD`] (`'*'`).
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_wildcard(pattern, DEFAULT_WILDCARD)
    }

    /// Create a matcher with a custom wildcard symbol.
    pub fn with_wildcard(pattern: impl Into<String>, wildcard: char) -> Self {
        let source = pattern.into();
        let pattern: Vec<char> = source.chars().collect();
        let prefix_table = build_prefix_table(&pattern, wildcard);
        WildcardMatcher {
            source,
            pattern,
            wildcard,
            prefix_table,
        }
    }

    /// Get the pattern string.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Get the wildcard symbol.
    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    /// Find all start offsets (in chars) where the pattern matches.
    ///
    /// An empty pattern matches nothing.
    pub fn find_all(&self, text: &str) -> Vec<usize> {
        let mut positions = Vec::new();
        if self.pattern.is_empty() {
            return positions;
        }

        let mut matched = 0;
        for (i, symbol) in text.chars().enumerate() {
            while matched > 0 && !self.accepts(matched, symbol) {
                matched = self.prefix_table[matched - 1];
            }
            if self.accepts(matched, symbol) {
                matched += 1;
            }
            if matched == self.pattern.len() {
                positions.push(i + 1 - matched);
                matched = self.prefix_table[matched - 1];
            }
        }
        positions
    }

    /// Whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        !self.find_all(text).is_empty()
    }

    fn accepts(&self, position: usize, symbol: char) -> bool {
        self.pattern[position] == self.wildcard || self.pattern[position] == symbol
    }
}

/// Longest-proper-prefix-suffix table, with the wildcard treated as
/// matching any symbol during self-comparison.
fn build_prefix_table(pattern: &[char], wildcard: char) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut matched = 0;

    for i in 1..pattern.len() {
        while matched > 0 && pattern[i] != pattern[matched] && pattern[matched] != wildcard {
            matched = table[matched - 1];
        }
        if pattern[i] == pattern[matched] || pattern[matched] == wildcard {
            matched += 1;
            table[i] = matched;
        }
    }
    table
}
