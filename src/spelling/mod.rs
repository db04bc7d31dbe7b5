//! Dictionary-based spell checking.
//!
//! A plain membership trie ([`trie::TrieDictionary`]) plus a checker
//! ([`checker::SpellChecker`]) that tokenizes a text into alphabetic
//! runs and reports the words absent from the dictionary. These
//! utilities share no runtime state with the multi-pattern automaton.

pub mod checker;
pub mod trie;

pub use checker::SpellChecker;
pub use trie::TrieDictionary;
