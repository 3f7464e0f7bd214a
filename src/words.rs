//! Word corpus and word selection.

use crate::error::{ConfigError, WordError};
use crate::game::SecretWord;
use crate::rng::{IndexSource, SystemRandom};

/// Built-in corpus. Lowercase ASCII letters only.
pub const WORDS: &[&str] = &[
    "about", "account", "across", "addition", "algorithm", "array", "binary", "bitwise",
    "boolean", "bracket", "branch", "buffer", "cache", "closure", "commit", "compile",
    "console", "cursor", "debug", "deploy", "function", "garbage", "generic", "hacker",
    "integer", "iterate", "kernel", "keyboard", "lambda", "library", "linker", "loop",
    "macro", "memory", "merge", "module", "monitor", "mutex", "network", "object",
    "offset", "packet", "parser", "pixel", "pointer", "process", "program", "query",
    "queue", "recursion", "refactor", "register", "router", "runtime", "scope", "server",
    "socket", "stack", "string", "syntax", "thread", "token", "tuple", "variable",
    "vector", "virtual", "widget", "window", "wizard", "zero",
];

/// Supplies the secret word for each new round.
pub trait WordSource {
    fn next_word(&mut self) -> SecretWord;
}

/// A validated, non-empty word list paired with an index source.
#[derive(Debug, Clone)]
pub struct Corpus<R = SystemRandom> {
    words: Vec<SecretWord>,
    rng: R,
}

impl<R: IndexSource> Corpus<R> {
    pub fn new<S: AsRef<str>>(words: &[S], rng: R) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyCorpus);
        }
        let words = words
            .iter()
            .map(|w| SecretWord::new(w.as_ref()))
            .collect::<Result<Vec<_>, WordError>>()?;
        Ok(Self { words, rng })
    }

    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }
}

impl Corpus<SystemRandom> {
    /// The built-in corpus with default randomness.
    pub fn builtin() -> Self {
        Self {
            words: WORDS
                .iter()
                .filter_map(|w| SecretWord::new(w).ok())
                .collect(),
            rng: SystemRandom::new(),
        }
    }
}

impl<R: IndexSource> WordSource for Corpus<R> {
    fn next_word(&mut self) -> SecretWord {
        let idx = self.rng.index(self.words.len());
        self.words[idx].clone()
    }
}

/// One random word from the built-in corpus.
pub fn random_word() -> SecretWord {
    Corpus::builtin().next_word()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceIndex;

    #[test]
    fn test_builtin_corpus_keeps_every_word() {
        assert_eq!(Corpus::builtin().words().len(), WORDS.len());
    }

    #[test]
    fn test_corpus_picks_by_index() {
        let mut c = Corpus::new(&["go", "rust", "zig"], SequenceIndex::new(vec![2, 0, 4])).unwrap();
        assert_eq!(c.next_word().to_string(), "zig");
        assert_eq!(c.next_word().to_string(), "go");
        assert_eq!(c.next_word().to_string(), "rust");
    }

    #[test]
    fn test_corpus_rejects_bad_input() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Corpus::new(&empty, SequenceIndex::new(vec![0])),
            Err(ConfigError::EmptyCorpus)
        ));
        assert!(matches!(
            Corpus::new(&["ok", "c#"], SequenceIndex::new(vec![0])),
            Err(ConfigError::Word(WordError::NotAlphabetic { found: '#', .. }))
        ));
    }

    #[test]
    fn test_random_word_is_from_corpus() {
        let w = random_word().to_string();
        assert!(WORDS.contains(&w.as_str()));
    }
}
