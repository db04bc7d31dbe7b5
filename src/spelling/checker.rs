//! Spell checking against a trie dictionary.
//!
//! The checker tokenizes text into maximal alphabetic runs, normalizes
//! each token (lowercasing by default), and reports the tokens missing
//! from the dictionary. Dictionary words pass through the same
//! normalizer, so lookups and entries always agree on case.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::analysis::normalizer::{LowercaseNormalizer, Normalizer};
use crate::error::Result;
use crate::spelling::trie::TrieDictionary;

/// A dictionary-backed spell checker.
///
/// # Examples
///
/// ```
/// use yari::spelling::checker::SpellChecker;
///
/// let mut checker = SpellChecker::new();
/// checker.add_word("hello");
/// checker.add_word("world");
///
/// assert_eq!(checker.check("Hello, wrold!"), vec!["wrold"]);
/// ```
pub struct SpellChecker {
    dictionary: TrieDictionary,
    normalizer: Box<dyn Normalizer>,
}

impl SpellChecker {
    /// Create a checker with an empty dictionary and lowercase
    /// normalization.
    pub fn new() -> Self {
        SpellChecker {
            dictionary: TrieDictionary::new(),
            normalizer: Box::new(LowercaseNormalizer::new()),
        }
    }

    /// Create a checker with a custom normalizer applied to dictionary
    /// words and text tokens alike.
    pub fn with_normalizer(normalizer: Box<dyn Normalizer>) -> Self {
        SpellChecker {
            dictionary: TrieDictionary::new(),
            normalizer,
        }
    }

    /// Load a dictionary from a text file with one word per line.
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn from_word_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut checker = SpellChecker::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                checker.add_word(word);
            }
        }

        debug!("loaded {} dictionary words", checker.dictionary.len());
        Ok(checker)
    }

    /// Add a word to the dictionary (normalized before insertion).
    pub fn add_word(&mut self, word: &str) {
        let normalized = self.normalizer.normalize(word);
        self.dictionary.insert(&normalized);
    }

    /// Check a text, returning the sorted set of words not found in the
    /// dictionary.
    ///
    /// Words are maximal runs of alphabetic codepoints; every other
    /// symbol is a separator.
    pub fn check(&self, text: &str) -> Vec<String> {
        let mut unknown = BTreeSet::new();
        let mut word = String::new();

        for symbol in text.chars() {
            if symbol.is_alphabetic() {
                word.push(symbol);
            } else {
                self.flush(&mut word, &mut unknown);
            }
        }
        self.flush(&mut word, &mut unknown);

        unknown.into_iter().collect()
    }

    /// Access the underlying dictionary.
    pub fn dictionary(&self) -> &TrieDictionary {
        &self.dictionary
    }

    fn flush(&self, word: &mut String, unknown: &mut BTreeSet<String>) {
        if word.is_empty() {
            return;
        }
        let normalized = self.normalizer.normalize(word);
        if !normalized.is_empty() && !self.dictionary.contains(&normalized) {
            unknown.insert(normalized);
        }
        word.clear();
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}
