//! Round state and everything derived from it.
//!
//! A [`Round`] owns exactly two pieces of mutable truth: the secret word and
//! the letters guessed so far. Win/loss and every UI flag are recomputed from
//! those on each read so nothing can go stale between renders.

use std::fmt;

use crate::error::WordError;
use crate::words::WordSource;

/// A single lowercase ASCII letter `a..=z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    pub const ALPHABET: [Letter; 26] = {
        let mut arr = [Letter(b'a'); 26];
        let mut i = 0;
        while i < 26 {
            arr[i] = Letter(b'a' + i as u8);
            i += 1;
        }
        arr
    };

    /// Accepts ASCII letters of either case; anything else is `None`.
    pub fn new(c: char) -> Option<Letter> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_lowercase() as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn to_upper(self) -> char {
        self.as_char().to_ascii_uppercase()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The word to guess: non-empty, lowercase ASCII letters only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretWord(Vec<Letter>);

impl SecretWord {
    pub fn new(word: &str) -> Result<Self, WordError> {
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        word.chars()
            .map(|c| {
                Letter::new(c).ok_or_else(|| WordError::NotAlphabetic {
                    word: word.to_string(),
                    found: c,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(SecretWord)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|l| write!(f, "{l}"))
    }
}

/// Round phase. Won and Lost are terminal for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// What a call to [`Round::add_guessed_letter`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// Letter was already guessed; nothing changed.
    Repeated,
    /// Round already finished; nothing changed.
    RoundOver,
}

impl GuessOutcome {
    pub fn accepted(self) -> bool {
        matches!(self, GuessOutcome::Correct | GuessOutcome::Wrong)
    }
}

#[derive(Clone, Debug)]
pub struct Round {
    word: SecretWord,
    guessed: Vec<Letter>,
    lives: usize,
}

impl Round {
    /// `lives` is the length of the language track; `lives - 1` wrong
    /// guesses end the round.
    pub fn new(word: SecretWord, lives: usize) -> Self {
        Self {
            word,
            guessed: Vec::new(),
            lives,
        }
    }

    /// Starts a round with a word drawn from `source`.
    pub fn from_source(source: &mut impl WordSource, lives: usize) -> Self {
        let round = Self::new(source.next_word(), lives);
        log::info!("new round: {} letters, {} lives", round.word.len(), lives);
        round
    }

    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed
    }

    pub fn lives(&self) -> usize {
        self.lives
    }

    /// Records a guess. Already-guessed letters and guesses after the round
    /// ended leave the round untouched.
    pub fn add_guessed_letter(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_game_over() {
            return GuessOutcome::RoundOver;
        }
        if self.is_guessed(letter) {
            return GuessOutcome::Repeated;
        }
        self.guessed.push(letter);
        let outcome = if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        };
        log::debug!("guess '{letter}': {outcome:?}");
        match self.status() {
            Status::Won => log::info!("round won after {} guesses", self.guessed.len()),
            Status::Lost => log::info!("round lost, word was '{}'", self.word),
            Status::InProgress => {}
        }
        outcome
    }

    /// Replaces word and guesses together with a fresh round.
    pub fn start_new_game(&mut self, source: &mut impl WordSource) {
        *self = Self::from_source(source, self.lives);
    }

    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.word.contains(letter)
    }

    /// Wrong guesses the round tolerates before it is lost.
    pub fn max_wrong_guesses(&self) -> usize {
        self.lives.saturating_sub(1)
    }

    pub fn wrong_guess_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|&&l| !self.word.contains(l))
            .count()
    }

    pub fn attempts_left(&self) -> usize {
        self.max_wrong_guesses()
            .saturating_sub(self.wrong_guess_count())
    }

    pub fn is_game_won(&self) -> bool {
        self.word.letters().iter().all(|&l| self.is_guessed(l))
    }

    pub fn is_game_lost(&self) -> bool {
        self.wrong_guess_count() >= self.max_wrong_guesses()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_won() || self.is_game_lost()
    }

    pub fn status(&self) -> Status {
        if self.is_game_won() {
            Status::Won
        } else if self.is_game_lost() {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    pub fn last_guessed_letter(&self) -> Option<Letter> {
        self.guessed.last().copied()
    }

    pub fn is_last_guess_incorrect(&self) -> bool {
        self.last_guessed_letter()
            .is_some_and(|l| !self.word.contains(l))
    }

    /// Index into the language track of the life the last guess cost, while
    /// the round is still running.
    pub fn farewell_index(&self) -> Option<usize> {
        if self.is_last_guess_incorrect() && !self.is_game_over() {
            self.wrong_guess_count().checked_sub(1)
        } else {
            None
        }
    }
}
