//! # Yari
//!
//! A fast multi-pattern string search library for Rust.
//!
//! Yari compiles a set of patterns into an Aho-Corasick automaton and
//! scans a text once, reporting every occurrence of every pattern in time
//! linear in the text length plus the match count.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Arena-backed Aho-Corasick automaton with an explicit open/sealed lifecycle
//! - Alphabet-agnostic core: scan chars, bytes, or any opaque symbol type
//! - Streaming (chunked) scans over large texts
//! - Single-pattern matchers: prefix-function search with wildcard, naive scan
//! - Trie-backed spell checking
//!
//! ## Example
//!
//! ```
//! use yari::automaton::AhoCorasick;
//!
//! let mut ac = AhoCorasick::new();
//! ac.insert("he".chars()).unwrap();
//! ac.insert("she".chars()).unwrap();
//! ac.seal().unwrap();
//!
//! let report = ac.scan("ushers".chars()).unwrap();
//! let he: Vec<char> = "he".chars().collect();
//! assert_eq!(report.offsets_of(&he), Some(&[2][..]));
//! ```

pub mod analysis;
pub mod automaton;
pub mod cli;
pub mod error;
pub mod matcher;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::normalizer::{
        AlphabeticNormalizer, LowercaseNormalizer, NoopNormalizer, Normalizer, NormalizerPipeline,
    };
    pub use crate::automaton::{AhoCorasick, ScanReport, StreamScanner};
    pub use crate::error::{Result, YariError};
    pub use crate::matcher::wildcard::WildcardMatcher;
    pub use crate::spelling::checker::SpellChecker;
    pub use crate::spelling::trie::TrieDictionary;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
