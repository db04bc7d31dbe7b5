//! Integration scenarios for multi-pattern search.

use yari::automaton::AhoCorasick;
use yari::error::{Result, YariError};
use yari::matcher::naive;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn sealed(patterns: &[&str]) -> Result<AhoCorasick<char>> {
    let mut ac = AhoCorasick::new();
    for pattern in patterns {
        ac.insert(pattern.chars())?;
    }
    ac.seal()?;
    Ok(ac)
}

/// Deterministic pseudo-random text over a small alphabet, so pattern
/// collisions and overlaps are frequent.
fn generate_text(len: usize, alphabet: &[char], seed: u64) -> String {
    let mut state = seed;
    let mut text = String::with_capacity(len);
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let index = (state >> 33) as usize % alphabet.len();
        text.push(alphabet[index]);
    }
    text
}

#[test]
fn test_results_match_naive_scan() -> Result<()> {
    let patterns = ["a", "ab", "ba", "aba", "bab", "abab", "bb", "aabb"];
    let text = generate_text(2000, &['a', 'b'], 42);

    let ac = sealed(&patterns)?;
    let report = ac.scan(text.chars())?;

    for pattern in patterns {
        let expected = naive::find_all(&text, pattern);
        assert_eq!(
            report.offsets_of(&chars(pattern)),
            Some(&expected[..]),
            "mismatch for pattern {pattern:?}"
        );
    }
    Ok(())
}

#[test]
fn test_reported_offsets_are_sound() -> Result<()> {
    let patterns = ["abc", "bca", "cab", "aa", "c"];
    let text = generate_text(1500, &['a', 'b', 'c'], 7);
    let text_chars = chars(&text);

    let ac = sealed(&patterns)?;
    let report = ac.scan(text.chars())?;

    for (pattern, offsets) in report.iter() {
        for &offset in offsets {
            assert_eq!(
                &text_chars[offset..offset + pattern.len()],
                pattern,
                "unsound match at offset {offset}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_insertion_order_does_not_change_results() -> Result<()> {
    let text = generate_text(1000, &['x', 'y', 'z'], 99);

    let forward = sealed(&["xy", "yz", "zx", "xyz", "x"])?;
    let backward = sealed(&["x", "xyz", "zx", "yz", "xy"])?;

    let forward_report = forward.scan(text.chars())?;
    let backward_report = backward.scan(text.chars())?;

    for pattern in ["xy", "yz", "zx", "xyz", "x"] {
        assert_eq!(
            forward_report.offsets_of(&chars(pattern)),
            backward_report.offsets_of(&chars(pattern)),
        );
    }
    Ok(())
}

#[test]
fn test_classic_scenario_offsets() -> Result<()> {
    let ac = sealed(&["he", "she", "hers"])?;
    let report = ac.scan("ushershe".chars())?;

    assert_eq!(report.offsets_of(&chars("he")), Some(&[2, 6][..]));
    assert_eq!(report.offsets_of(&chars("she")), Some(&[1, 5][..]));
    assert_eq!(report.offsets_of(&chars("hers")), Some(&[2][..]));
    Ok(())
}

#[test]
fn test_lifecycle_contract() -> Result<()> {
    let mut ac = AhoCorasick::new();
    ac.insert("he".chars())?;

    // Scan before sealing fails fast.
    assert!(matches!(
        ac.scan("he".chars()).unwrap_err(),
        YariError::NotSealed
    ));

    ac.seal()?;

    // Insert after sealing is rejected.
    assert!(matches!(
        ac.insert("she".chars()).unwrap_err(),
        YariError::SealedAutomaton
    ));

    // Empty pattern is rejected while open.
    let mut open: AhoCorasick<char> = AhoCorasick::new();
    assert!(matches!(
        open.insert(std::iter::empty()).unwrap_err(),
        YariError::InvalidPattern
    ));
    Ok(())
}

#[test]
fn test_chunked_scan_across_boundaries() -> Result<()> {
    let patterns = ["ab", "ba", "aba"];
    let text = generate_text(512, &['a', 'b'], 5);
    let ac = sealed(&patterns)?;

    let whole = ac.scan(text.chars())?;

    // Feed one symbol at a time: every occurrence straddles a boundary.
    let mut scanner = ac.scanner()?;
    for symbol in text.chars() {
        scanner.push(std::iter::once(symbol));
    }
    let chunked = scanner.finish();

    for pattern in patterns {
        assert_eq!(
            whole.offsets_of(&chars(pattern)),
            chunked.offsets_of(&chars(pattern)),
        );
    }
    Ok(())
}

#[test]
fn test_sealed_automaton_is_shareable_across_threads() -> Result<()> {
    let ac = sealed(&["he", "she", "hers"])?;
    let text = "ushershe";

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| ac.scan(text.chars()).unwrap().total_matches()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5);
        }
    });
    Ok(())
}

#[test]
fn test_patterns_sharing_suffixes_and_prefixes() -> Result<()> {
    // "ana" occurs with overlaps; "banana" ends where "nana" and "ana" end.
    let ac = sealed(&["ana", "nana", "banana", "ban"])?;
    let report = ac.scan("bananabanana".chars())?;

    assert_eq!(report.offsets_of(&chars("ban")), Some(&[0, 6][..]));
    assert_eq!(report.offsets_of(&chars("ana")), Some(&[1, 3, 7, 9][..]));
    assert_eq!(report.offsets_of(&chars("nana")), Some(&[2, 8][..]));
    assert_eq!(report.offsets_of(&chars("banana")), Some(&[0, 6][..]));
    Ok(())
}
