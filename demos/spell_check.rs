//! Spell checking demo.
//!
//! Run with: cargo run --example spell_check

use yari::spelling::checker::SpellChecker;

fn main() {
    let mut checker = SpellChecker::new();
    for word in [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog",
    ] {
        checker.add_word(word);
    }

    let text = "The qiuck brown fox jumsp over the lazy dog";
    println!("text: {text}");

    let misspelled = checker.check(text);
    if misspelled.is_empty() {
        println!("no misspelled words");
    } else {
        println!("misspelled words:");
        for word in misspelled {
            println!("  {word}");
        }
    }
}
