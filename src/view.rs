//! Render model computed from a [`Round`]. Pure data; the DOM layer only
//! copies these values onto elements, which keeps the UI rules testable off
//! the browser.

use crate::game::{Letter, Round, Status};
use crate::languages::{Language, farewell_text};

pub const TITLE: &str = "Assembly Endgame";
pub const WIN_HEADING: &str = "You win!";
pub const WIN_INFO: &str = "Well done! 🍕";
pub const LOSS_HEADING: &str = "Game over!";
pub const LOSS_INFO: &str = "You lose! Better start learning Assembly!";
pub const NEW_GAME_LABEL: &str = "New Game";

pub fn description(max_wrong_guesses: usize) -> String {
    format!(
        "Guess the word within {max_wrong_guesses} attempts to keep the programming world safe from Assembly!"
    )
}

/// One tile of the secret word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterTile {
    pub letter: Letter,
    /// Uppercase letter once revealed, empty otherwise.
    pub display: String,
    /// Never guessed and exposed by a loss.
    pub missed: bool,
}

impl LetterTile {
    pub fn class_name(&self) -> &'static str {
        if self.missed {
            "word__letter word__letter--missed"
        } else {
            "word__letter"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageChip {
    pub name: String,
    pub lost: bool,
    pub style: String,
}

impl LanguageChip {
    pub fn class_name(&self) -> &'static str {
        if self.lost {
            "language-chips__chip language-chips__chip--lost"
        } else {
            "language-chips__chip"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyView {
    pub letter: Letter,
    pub state: KeyState,
    /// Round finished; no more input.
    pub disabled: bool,
    /// Already guessed (announced to assistive tech, still clickable as a no-op).
    pub aria_disabled: bool,
}

impl KeyView {
    pub fn class_name(&self) -> String {
        let modifier = match self.state {
            KeyState::Unused => "",
            KeyState::Correct => "correct",
            KeyState::Wrong => "wrong",
        };
        format!("keyboard__letter keyboard__letter--{modifier}")
    }

    pub fn aria_label(&self) -> String {
        format!("Letter {}", self.letter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Empty,
    Farewell(String),
    Won,
    Lost,
}

impl StatusMessage {
    pub fn class_name(&self) -> &'static str {
        match self {
            StatusMessage::Empty => "game-status",
            StatusMessage::Farewell(_) => "game-status game-status--farewell",
            StatusMessage::Won => "game-status game-status--won",
            StatusMessage::Lost => "game-status game-status--lost",
        }
    }

    /// (heading, info) pair for terminal messages.
    pub fn texts(&self) -> Option<(&'static str, &'static str)> {
        match self {
            StatusMessage::Won => Some((WIN_HEADING, WIN_INFO)),
            StatusMessage::Lost => Some((LOSS_HEADING, LOSS_INFO)),
            _ => None,
        }
    }
}

/// Everything the page shows for one round state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub tiles: Vec<LetterTile>,
    pub chips: Vec<LanguageChip>,
    pub keys: Vec<KeyView>,
    pub status: StatusMessage,
    /// Screen-reader line about the last guess, absent before the first guess.
    pub guess_announcement: Option<String>,
    pub word_announcement: String,
    pub show_new_game: bool,
    pub show_confetti: bool,
}

impl GameView {
    pub fn from_round(round: &Round, languages: &[Language]) -> Self {
        let lost = round.is_game_lost();
        let over = round.is_game_over();
        let wrong = round.wrong_guess_count();

        let tiles = round
            .word()
            .letters()
            .iter()
            .map(|&letter| {
                let guessed = round.is_guessed(letter);
                LetterTile {
                    letter,
                    display: if guessed || lost {
                        letter.to_upper().to_string()
                    } else {
                        String::new()
                    },
                    missed: lost && !guessed,
                }
            })
            .collect();

        let chips = languages
            .iter()
            .enumerate()
            .map(|(i, lang)| LanguageChip {
                name: lang.name.to_string(),
                lost: i < wrong,
                style: format!(
                    "background-color: {}; color: {};",
                    lang.background_color, lang.color
                ),
            })
            .collect();

        let keys = Letter::ALPHABET
            .iter()
            .map(|&letter| {
                let guessed = round.is_guessed(letter);
                let state = match (guessed, round.contains(letter)) {
                    (false, _) => KeyState::Unused,
                    (true, true) => KeyState::Correct,
                    (true, false) => KeyState::Wrong,
                };
                KeyView {
                    letter,
                    state,
                    disabled: over,
                    aria_disabled: guessed,
                }
            })
            .collect();

        let status = match round.status() {
            Status::Won => StatusMessage::Won,
            Status::Lost => StatusMessage::Lost,
            Status::InProgress => round
                .farewell_index()
                .and_then(|i| languages.get(i))
                .map(|lang| StatusMessage::Farewell(farewell_text(&lang.name)))
                .unwrap_or(StatusMessage::Empty),
        };

        let guess_announcement = round.last_guessed_letter().map(|l| {
            let head = if round.contains(l) {
                format!("Correct! The letter {l} is in the word.")
            } else {
                format!("Sorry, the letter {l} is not in the word.")
            };
            format!("{head} You have {} attempts left.", round.attempts_left())
        });

        let word_announcement = format!(
            "Current word: {}",
            round
                .word()
                .letters()
                .iter()
                .map(|&l| if round.is_guessed(l) {
                    format!("{l}.")
                } else {
                    "blank.".to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        );

        GameView {
            tiles,
            chips,
            keys,
            status,
            guess_announcement,
            word_announcement,
            show_new_game: over,
            show_confetti: round.is_game_won(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SecretWord;
    use crate::languages::LANGUAGES;

    fn play(word: &str, guesses: &str) -> Round {
        let mut r = Round::new(SecretWord::new(word).unwrap(), LANGUAGES.len());
        for c in guesses.chars() {
            r.add_guessed_letter(Letter::new(c).unwrap());
        }
        r
    }

    #[test]
    fn test_fresh_round_view() {
        let v = GameView::from_round(&play("go", ""), LANGUAGES);
        assert_eq!(v.tiles.len(), 2);
        assert!(v.tiles.iter().all(|t| t.display.is_empty() && !t.missed));
        assert_eq!(v.keys.len(), 26);
        assert!(v.keys.iter().all(|k| !k.disabled && k.state == KeyState::Unused));
        assert_eq!(v.status, StatusMessage::Empty);
        assert_eq!(v.guess_announcement, None);
        assert_eq!(v.word_announcement, "Current word: blank. blank.");
        assert!(!v.show_new_game);
    }

    #[test]
    fn test_wrong_guess_consumes_first_chip_and_says_farewell() {
        let v = GameView::from_round(&play("go", "a"), LANGUAGES);
        assert!(v.chips[0].lost);
        assert!(v.chips[1..].iter().all(|c| !c.lost));
        assert_eq!(v.status, StatusMessage::Farewell(farewell_text("HTML")));
        assert_eq!(v.keys[0].state, KeyState::Wrong);
        assert!(v.keys[0].aria_disabled);
        assert_eq!(v.keys[0].class_name(), "keyboard__letter keyboard__letter--wrong");
        assert_eq!(
            v.guess_announcement.as_deref(),
            Some("Sorry, the letter a is not in the word. You have 7 attempts left.")
        );
    }

    #[test]
    fn test_loss_reveals_missed_letters_and_disables_keys() {
        let v = GameView::from_round(&play("go", "abcdefghi"), LANGUAGES);
        assert_eq!(v.status, StatusMessage::Lost);
        assert_eq!(v.tiles[0].display, "G");
        assert!(!v.tiles[0].missed);
        assert_eq!(v.tiles[1].display, "O");
        assert!(v.tiles[1].missed);
        assert_eq!(v.tiles[1].class_name(), "word__letter word__letter--missed");
        assert!(v.keys.iter().all(|k| k.disabled));
        assert_eq!(v.chips.iter().filter(|c| c.lost).count(), 8);
        assert!(!v.chips[8].lost);
        assert!(v.show_new_game);
        assert!(!v.show_confetti);
    }

    #[test]
    fn test_win_view() {
        let v = GameView::from_round(&play("go", "xgo"), LANGUAGES);
        assert_eq!(v.status, StatusMessage::Won);
        assert_eq!(v.status.texts(), Some((WIN_HEADING, WIN_INFO)));
        assert_eq!(v.word_announcement, "Current word: g. o.");
        assert!(v.show_confetti && v.show_new_game);
        assert_eq!(v.keys[6].class_name(), "keyboard__letter keyboard__letter--correct");
    }

    #[test]
    fn test_correct_guess_clears_farewell() {
        let v = GameView::from_round(&play("go", "ag"), LANGUAGES);
        assert_eq!(v.status, StatusMessage::Empty);
        assert_eq!(v.tiles[0].display, "G");
        assert!(v.tiles[1].display.is_empty());
    }
}
