//! Multi-pattern search demo.
//!
//! Run with: cargo run --example multi_pattern_search

use yari::automaton::AhoCorasick;
use yari::error::Result;

fn main() -> Result<()> {
    let text = "the shepherd ushered the sheep; she shushed her hushed herd";

    let mut ac = AhoCorasick::new();
    for pattern in ["she", "he", "her", "herd", "hush"] {
        ac.insert(pattern.chars())?;
    }
    ac.seal()?;

    println!("text: {text}");
    println!(
        "automaton: {} patterns, {} states\n",
        ac.pattern_count(),
        ac.node_count()
    );

    let report = ac.scan(text.chars())?;
    for (pattern, offsets) in report.iter() {
        let pattern: String = pattern.iter().collect();
        if offsets.is_empty() {
            println!("{pattern}: no occurrences");
        } else {
            println!("{pattern}: {offsets:?}");
        }
    }
    println!("\n{} occurrences total", report.total_matches());

    Ok(())
}
