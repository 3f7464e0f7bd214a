// Additional integration tests for data invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use assembly_endgame::{LANGUAGES, WORDS, farewell_text};

#[test]
fn words_are_unique_lowercase_and_alphabetic() {
    let mut seen = HashSet::new();
    for w in WORDS {
        assert!(seen.insert(*w), "duplicate word '{}' in WORDS", w);
        assert!(!w.is_empty(), "empty word in WORDS");
        for c in w.chars() {
            assert!(c.is_ascii_lowercase(), "invalid char '{}' in word '{}'", c, w);
        }
    }
}

#[test]
fn languages_are_unique_with_hex_colors() {
    let mut seen = HashSet::new();
    for lang in LANGUAGES {
        assert!(seen.insert(&*lang.name), "duplicate language '{}'", lang.name);
        for color in [&lang.background_color, &lang.color] {
            assert!(color.starts_with('#') && color.len() == 7, "bad color '{}' for '{}'", color, lang.name);
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()), "bad color '{}'", color);
        }
    }
}

#[test]
fn farewell_lines_use_more_than_one_template() {
    let lines: HashSet<String> = LANGUAGES.iter().map(|l| farewell_text(&l.name).replace(&*l.name, "_")).collect();
    assert!(lines.len() > 1, "every language got the same farewell template");
}
