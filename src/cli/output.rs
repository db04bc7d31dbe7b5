//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, YariArgs};
use crate::error::Result;

/// Occurrences of one pattern.
#[derive(Debug, Serialize, Deserialize)]
pub struct PatternOccurrences {
    pub pattern: String,
    pub offsets: Vec<usize>,
    pub count: usize,
}

/// Result structure for multi-pattern search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub matches: Vec<PatternOccurrences>,
    pub total_matches: usize,
    pub automaton_nodes: usize,
    pub duration_ms: f64,
}

/// Result structure for single-pattern search (wildcard or naive).
#[derive(Debug, Serialize, Deserialize)]
pub struct SingleSearchResults {
    pub algorithm: String,
    pub pattern: String,
    pub offsets: Vec<usize>,
    pub count: usize,
    pub duration_ms: f64,
}

/// Result structure for spell checking.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellCheckResults {
    pub misspelled: Vec<String>,
    pub count: usize,
    pub dictionary_words: usize,
    pub duration_ms: f64,
}

/// A command result that can be rendered for humans.
pub trait Render: Serialize {
    /// Produce the human-readable rendering.
    fn human(&self) -> String;
}

impl Render for SearchResults {
    fn human(&self) -> String {
        let mut lines = Vec::new();
        for entry in &self.matches {
            if entry.offsets.is_empty() {
                lines.push(format!("{}: no occurrences", entry.pattern));
            } else {
                let offsets: Vec<String> =
                    entry.offsets.iter().map(|o| o.to_string()).collect();
                lines.push(format!("{}: {}", entry.pattern, offsets.join(" ")));
            }
        }
        lines.push(format!(
            "{} occurrences total ({:.3} ms)",
            self.total_matches, self.duration_ms
        ));
        lines.join("\n")
    }
}

impl Render for SingleSearchResults {
    fn human(&self) -> String {
        let occurrences = if self.offsets.is_empty() {
            "no occurrences".to_string()
        } else {
            let offsets: Vec<String> = self.offsets.iter().map(|o| o.to_string()).collect();
            offsets.join(" ")
        };
        format!(
            "{} \"{}\": {} ({:.3} ms)",
            self.algorithm, self.pattern, occurrences, self.duration_ms
        )
    }
}

impl Render for SpellCheckResults {
    fn human(&self) -> String {
        let mut lines = vec![format!("misspelled words: {}", self.count)];
        for word in &self.misspelled {
            lines.push(word.clone());
        }
        lines.push(format!(
            "checked against {} dictionary words ({:.3} ms)",
            self.dictionary_words, self.duration_ms
        ));
        lines.join("\n")
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Render>(result: &T, args: &YariArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", result.human());
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_human_rendering() {
        let results = SearchResults {
            matches: vec![
                PatternOccurrences {
                    pattern: "he".to_string(),
                    offsets: vec![2, 6],
                    count: 2,
                },
                PatternOccurrences {
                    pattern: "xyz".to_string(),
                    offsets: vec![],
                    count: 0,
                },
            ],
            total_matches: 2,
            automaton_nodes: 5,
            duration_ms: 0.5,
        };

        let human = results.human();
        assert!(human.contains("he: 2 6"));
        assert!(human.contains("xyz: no occurrences"));
        assert!(human.contains("2 occurrences total"));
    }

    #[test]
    fn test_spell_check_results_serialize() {
        let results = SpellCheckResults {
            misspelled: vec!["wrold".to_string()],
            count: 1,
            dictionary_words: 10,
            duration_ms: 1.0,
        };

        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"misspelled\":[\"wrold\"]"));
    }
}
