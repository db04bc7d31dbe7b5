//! Command execution logic for the Yari CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::analysis::normalizer::{LowercaseNormalizer, NoopNormalizer, Normalizer};
use crate::automaton::AhoCorasick;
use crate::cli::args::{
    Command, NaiveArgs, SearchArgs, SpellcheckArgs, WildcardArgs, YariArgs,
};
use crate::cli::output::{
    PatternOccurrences, SearchResults, SingleSearchResults, SpellCheckResults, output_result,
};
use crate::error::{Result, YariError};
use crate::matcher::naive;
use crate::matcher::wildcard::WildcardMatcher;
use crate::spelling::checker::SpellChecker;

/// Execute the parsed command.
pub fn execute_command(args: YariArgs) -> Result<()> {
    match args.command.clone() {
        Command::Search(search_args) => execute_search(&args, &search_args),
        Command::Wildcard(wildcard_args) => execute_wildcard(&args, &wildcard_args),
        Command::Naive(naive_args) => execute_naive(&args, &naive_args),
        Command::Spellcheck(spellcheck_args) => execute_spellcheck(&args, &spellcheck_args),
    }
}

fn normalizer_for(args: &YariArgs) -> Box<dyn Normalizer> {
    if args.normalize_enabled() {
        Box::new(LowercaseNormalizer::new())
    } else {
        Box::new(NoopNormalizer::new())
    }
}

fn load_text(path: &Path, normalizer: &dyn Normalizer) -> Result<String> {
    let text = fs::read_to_string(path)?;
    debug!("loaded {} bytes from {}", text.len(), path.display());
    Ok(normalizer.normalize(&text))
}

fn execute_search(args: &YariArgs, search_args: &SearchArgs) -> Result<()> {
    let normalizer = normalizer_for(args);
    let text = load_text(&search_args.text_file, normalizer.as_ref())?;

    let mut patterns = search_args.patterns.clone();
    if let Some(path) = &search_args.patterns_file {
        let contents = fs::read_to_string(path)?;
        patterns.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }
    if patterns.is_empty() {
        return Err(YariError::invalid_argument(
            "no patterns given; pass PATTERN arguments or --patterns-file",
        ));
    }

    // Search the normalized form, report under the form the user typed.
    let mut ac = AhoCorasick::new();
    for pattern in &patterns {
        ac.insert(normalizer.normalize(pattern).chars())?;
    }
    ac.seal()?;
    info!(
        "compiled {} patterns into {} automaton states",
        ac.pattern_count(),
        ac.node_count()
    );

    let start = Instant::now();
    let report = ac.scan(text.chars())?;
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut matches = Vec::with_capacity(patterns.len());
    for pattern in &patterns {
        let normalized: Vec<char> = normalizer.normalize(pattern).chars().collect();
        let mut offsets = report
            .offsets_of(&normalized)
            .map(<[usize]>::to_vec)
            .unwrap_or_default();
        offsets.sort_unstable();
        matches.push(PatternOccurrences {
            pattern: pattern.clone(),
            count: offsets.len(),
            offsets,
        });
    }

    let results = SearchResults {
        total_matches: report.total_matches(),
        automaton_nodes: ac.node_count(),
        matches,
        duration_ms,
    };
    output_result(&results, args)
}

fn execute_wildcard(args: &YariArgs, wildcard_args: &WildcardArgs) -> Result<()> {
    let normalizer = normalizer_for(args);
    let text = load_text(&wildcard_args.text_file, normalizer.as_ref())?;
    let matcher = WildcardMatcher::with_wildcard(
        normalizer.normalize(&wildcard_args.pattern),
        wildcard_args.wildcard,
    );

    let start = Instant::now();
    let offsets = matcher.find_all(&text);
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let results = SingleSearchResults {
        algorithm: "wildcard-kmp".to_string(),
        pattern: wildcard_args.pattern.clone(),
        count: offsets.len(),
        offsets,
        duration_ms,
    };
    output_result(&results, args)
}

fn execute_naive(args: &YariArgs, naive_args: &NaiveArgs) -> Result<()> {
    let normalizer = normalizer_for(args);
    let text = load_text(&naive_args.text_file, normalizer.as_ref())?;
    let pattern = normalizer.normalize(&naive_args.pattern);

    let start = Instant::now();
    let offsets = naive::find_all(&text, &pattern);
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let results = SingleSearchResults {
        algorithm: "naive".to_string(),
        pattern: naive_args.pattern.clone(),
        count: offsets.len(),
        offsets,
        duration_ms,
    };
    output_result(&results, args)
}

fn execute_spellcheck(args: &YariArgs, spellcheck_args: &SpellcheckArgs) -> Result<()> {
    let checker = SpellChecker::from_word_file(&spellcheck_args.dictionary)?;
    let text = fs::read_to_string(&spellcheck_args.text_file)?;
    info!(
        "spell checking {} against {} dictionary words",
        spellcheck_args.text_file.display(),
        checker.dictionary().len()
    );

    let start = Instant::now();
    let misspelled = checker.check(&text);
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let results = SpellCheckResults {
        count: misspelled.len(),
        dictionary_words: checker.dictionary().len(),
        misspelled,
        duration_ms,
    };
    output_result(&results, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_execute_search_end_to_end() {
        let text = temp_file_with("ushershe");
        let args = YariArgs::try_parse_from([
            "yari",
            "--quiet",
            "search",
            text.path().to_str().unwrap(),
            "he",
            "she",
            "hers",
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_search_without_patterns_fails() {
        let text = temp_file_with("ushershe");
        let args = YariArgs::try_parse_from([
            "yari",
            "--quiet",
            "search",
            text.path().to_str().unwrap(),
        ])
        .unwrap();

        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_execute_spellcheck_end_to_end() {
        let text = temp_file_with("the cat zat");
        let dict = temp_file_with("the\ncat\n");
        let args = YariArgs::try_parse_from([
            "yari",
            "--quiet",
            "--format",
            "json",
            "spellcheck",
            text.path().to_str().unwrap(),
            dict.path().to_str().unwrap(),
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }
}
