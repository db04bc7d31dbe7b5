//! Command line argument parsing for the Yari CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Yari - multi-pattern text search
#[derive(Parser, Debug, Clone)]
#[command(name = "yari")]
#[command(about = "Fast multi-pattern string search over text files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct YariArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Do not lowercase text and patterns before matching
    #[arg(long)]
    pub no_normalize: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl YariArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Whether text and patterns should be lowercased before matching
    pub fn normalize_enabled(&self) -> bool {
        !self.no_normalize
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search for multiple patterns simultaneously (Aho-Corasick)
    Search(SearchArgs),

    /// Search for a single pattern with wildcard support (KMP)
    Wildcard(WildcardArgs),

    /// Search for a single pattern with the naive scanner
    Naive(NaiveArgs),

    /// Report words of a text missing from a dictionary
    Spellcheck(SpellcheckArgs),
}

/// Arguments for multi-pattern search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the text file to scan
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Patterns to search for
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// File with additional patterns, one per line
    #[arg(short, long, value_name = "PATTERNS_FILE")]
    pub patterns_file: Option<PathBuf>,
}

/// Arguments for wildcard (KMP) search
#[derive(Parser, Debug, Clone)]
pub struct WildcardArgs {
    /// Path to the text file to scan
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Pattern to search for; the wildcard symbol matches any single character
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Wildcard symbol
    #[arg(short, long, default_value = "*")]
    pub wildcard: char,
}

/// Arguments for naive search
#[derive(Parser, Debug, Clone)]
pub struct NaiveArgs {
    /// Path to the text file to scan
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Pattern to search for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

/// Arguments for spell checking
#[derive(Parser, Debug, Clone)]
pub struct SpellcheckArgs {
    /// Path to the text file to check
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Dictionary file with one word per line
    #[arg(value_name = "DICTIONARY_FILE")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_search_command() {
        let args =
            YariArgs::try_parse_from(["yari", "search", "text.txt", "he", "she", "hers"]).unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.text_file, PathBuf::from("text.txt"));
            assert_eq!(search_args.patterns, vec!["he", "she", "hers"]);
            assert!(search_args.patterns_file.is_none());
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_search_with_patterns_file() {
        let args = YariArgs::try_parse_from([
            "yari",
            "search",
            "text.txt",
            "--patterns-file",
            "words.txt",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.patterns_file, Some(PathBuf::from("words.txt")));
            assert!(search_args.patterns.is_empty());
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_wildcard_command() {
        let args = YariArgs::try_parse_from([
            "yari",
            "wildcard",
            "text.txt",
            "h?t",
            "--wildcard",
            "?",
        ])
        .unwrap();

        if let Command::Wildcard(wildcard_args) = args.command {
            assert_eq!(wildcard_args.pattern, "h?t");
            assert_eq!(wildcard_args.wildcard, '?');
        } else {
            panic!("Expected Wildcard command");
        }
    }

    #[test]
    fn test_spellcheck_command() {
        let args =
            YariArgs::try_parse_from(["yari", "spellcheck", "text.txt", "dict.txt"]).unwrap();

        if let Command::Spellcheck(spellcheck_args) = args.command {
            assert_eq!(spellcheck_args.text_file, PathBuf::from("text.txt"));
            assert_eq!(spellcheck_args.dictionary, PathBuf::from("dict.txt"));
        } else {
            panic!("Expected Spellcheck command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = YariArgs::try_parse_from(["yari", "naive", "t.txt", "p"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = YariArgs::try_parse_from(["yari", "-vv", "naive", "t.txt", "p"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = YariArgs::try_parse_from(["yari", "--quiet", "naive", "t.txt", "p"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format_and_normalize_flags() {
        let args = YariArgs::try_parse_from([
            "yari",
            "--format",
            "json",
            "--no-normalize",
            "naive",
            "t.txt",
            "p",
        ])
        .unwrap();

        assert!(matches!(args.output_format, OutputFormat::Json));
        assert!(!args.normalize_enabled());
    }
}
