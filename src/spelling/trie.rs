//! Membership trie for dictionary lookups.
//!
//! Stores words character-for-character along root-to-node paths.
//! Symbols are stored literally: case folding and symbol filtering are
//! the caller's responsibility (see [`crate::analysis::normalizer`]),
//! so `"Rust"` and `"rust"` are distinct entries.

use ahash::AHashMap;

struct TrieNode {
    children: AHashMap<char, usize>,
    word_end: bool,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode {
            children: AHashMap::new(),
            word_end: false,
        }
    }
}

/// A set of words supporting O(|word|) insertion and lookup.
///
/// # Examples
///
/// ```
/// use yari::spelling::trie::TrieDictionary;
///
/// let mut dict = TrieDictionary::new();
/// dict.insert("rust");
/// assert!(dict.contains("rust"));
/// assert!(!dict.contains("rus"));
/// ```
pub struct TrieDictionary {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl TrieDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        TrieDictionary {
            nodes: vec![TrieNode::new()],
            words: 0,
        }
    }

    /// Add a word to the dictionary. Empty words and duplicates are
    /// ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current = 0;
        for symbol in word.chars() {
            current = match self.nodes[current].children.get(&symbol) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[current].children.insert(symbol, child);
                    child
                }
            };
        }
        if !self.nodes[current].word_end {
            self.nodes[current].word_end = true;
            self.words += 1;
        }
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        let mut current = 0;
        for symbol in word.chars() {
            match self.nodes[current].children.get(&symbol) {
                Some(&child) => current = child,
                None => return false,
            }
        }
        self.nodes[current].word_end
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl Default for TrieDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut dict = TrieDictionary::new();
        assert!(dict.is_empty());

        dict.insert("casa");
        dict.insert("caso");
        dict.insert("ca");

        assert_eq!(dict.len(), 3);
        assert!(dict.contains("casa"));
        assert!(dict.contains("caso"));
        assert!(dict.contains("ca"));
        assert!(!dict.contains("cas"));
        assert!(!dict.contains("casas"));
    }

    #[test]
    fn test_duplicates_are_counted_once() {
        let mut dict = TrieDictionary::new();
        dict.insert("word");
        dict.insert("word");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_empty_word_is_ignored() {
        let mut dict = TrieDictionary::new();
        dict.insert("");
        assert!(dict.is_empty());
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_symbols_are_stored_literally() {
        let mut dict = TrieDictionary::new();
        dict.insert("Rust");
        assert!(dict.contains("Rust"));
        assert!(!dict.contains("rust"));
    }

    #[test]
    fn test_unicode_words() {
        let mut dict = TrieDictionary::new();
        dict.insert("coração");
        assert!(dict.contains("coração"));
        assert!(!dict.contains("coracao"));
    }
}
