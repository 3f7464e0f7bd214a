//! Browser presentation layer.
//!
//! Builds the page skeleton once, keeps the current round in a thread-local
//! cell, and re-renders from a fresh [`GameView`] after every mutation.
//! Event closures live for the lifetime of the page and are leaked with
//! `Closure::forget`.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, window};

use crate::config::GameConfig;
use crate::error::DomError;
use crate::game::{GuessOutcome, Letter, Round};
use crate::languages::Language;
use crate::rng::SystemRandom;
use crate::view::{self, GameView, StatusMessage};
use crate::words::Corpus;

const ROOT_ID: &str = "ae-root";
const STATUS_ID: &str = "ae-status";
const CHIPS_ID: &str = "ae-chips";
const WORD_ID: &str = "ae-word";
const GUESS_ANNOUNCE_ID: &str = "ae-announce-guess";
const WORD_ANNOUNCE_ID: &str = "ae-announce-word";
const NEW_GAME_ID: &str = "ae-new-game";

fn key_id(letter: Letter) -> String {
    format!("ae-key-{letter}")
}

struct GameState {
    round: Round,
    corpus: Corpus,
    languages: Vec<Language>,
}

thread_local! {
    static GAME: RefCell<Option<GameState>> = const { RefCell::new(None) };
    static KEYDOWN_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

fn document() -> Result<Document, DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

fn with_game<R>(f: impl FnOnce(&mut GameState) -> R) -> Result<R, DomError> {
    GAME.with(|cell| cell.borrow_mut().as_mut().map(f).ok_or(DomError::NotStarted))
}

/// Builds (or rebuilds) the page for `config` and starts the first round.
pub fn mount(config: GameConfig) -> Result<(), DomError> {
    let mut corpus = config.corpus(SystemRandom::new())?;
    let round = Round::from_source(&mut corpus, config.languages.len());
    let doc = document()?;

    build_skeleton(&doc, round.max_wrong_guesses())?;
    GAME.with(|cell| {
        cell.replace(Some(GameState {
            round,
            corpus,
            languages: config.languages,
        }))
    });
    install_keydown(&doc)?;
    render()
}

/// Feeds a letter into the current round and re-renders.
pub fn guess(letter: Letter) -> Result<GuessOutcome, DomError> {
    let outcome = with_game(|g| g.round.add_guessed_letter(letter))?;
    if outcome.accepted() {
        render()?;
    }
    Ok(outcome)
}

/// Replaces the current round with a new one and re-renders.
pub fn new_game() -> Result<(), DomError> {
    with_game(|g| g.round.start_new_game(&mut g.corpus))?;
    render()
}

fn build_skeleton(doc: &Document, max_wrong_guesses: usize) -> Result<(), DomError> {
    let root = match doc.get_element_by_id(ROOT_ID) {
        Some(el) => {
            el.set_text_content(Some(""));
            el
        }
        None => {
            let el = doc.create_element("main")?;
            el.set_id(ROOT_ID);
            doc.body().ok_or(DomError::NoBody)?.append_child(&el)?;
            el
        }
    };

    let header = child(doc, &root, "header", "header")?;
    child(doc, &header, "h1", "header__title")?.set_text_content(Some(view::TITLE));
    child(doc, &header, "p", "header__description")?
        .set_text_content(Some(&view::description(max_wrong_guesses)));

    let status = child(doc, &root, "section", "game-status")?;
    status.set_id(STATUS_ID);
    status.set_attribute("aria-live", "polite")?;
    status.set_attribute("role", "status")?;

    child(doc, &root, "section", "language-chips")?.set_id(CHIPS_ID);
    child(doc, &root, "section", "word")?.set_id(WORD_ID);

    let announce = child(doc, &root, "section", "sr-only")?;
    announce.set_attribute("aria-live", "polite")?;
    announce.set_attribute("role", "status")?;
    child(doc, &announce, "p", "")?.set_id(GUESS_ANNOUNCE_ID);
    child(doc, &announce, "p", "")?.set_id(WORD_ANNOUNCE_ID);

    let keyboard = child(doc, &root, "section", "keyboard")?;
    for letter in Letter::ALPHABET {
        let btn = child(doc, &keyboard, "button", "keyboard__letter")?;
        btn.set_id(&key_id(letter));
        btn.set_text_content(Some(&letter.to_upper().to_string()));
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            if let Err(err) = guess(letter) {
                log::warn!("guess '{letter}' failed: {err}");
            }
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let new_game_btn = child(doc, &root, "button", "new-game-btn")?;
    new_game_btn.set_id(NEW_GAME_ID);
    new_game_btn.set_text_content(Some(view::NEW_GAME_LABEL));
    new_game_btn.set_attribute("hidden", "")?;
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        if let Err(err) = new_game() {
            log::warn!("new game failed: {err}");
        }
    }) as Box<dyn FnMut(_)>);
    new_game_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

/// Physical keyboard: letters guess, Enter starts a new round once the
/// current one is over. Installed once per page.
fn install_keydown(doc: &Document) -> Result<(), DomError> {
    if KEYDOWN_INSTALLED.with(|c| c.replace(true)) {
        return Ok(());
    }
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        if evt.ctrl_key() || evt.meta_key() || evt.alt_key() || evt.repeat() {
            return;
        }
        let key = evt.key();
        let result = if key == "Enter" {
            match with_game(|g| g.round.is_game_over()) {
                Ok(true) => new_game(),
                Ok(false) => Ok(()),
                Err(err) => Err(err),
            }
        } else {
            let mut chars = key.chars();
            match (chars.next().and_then(Letter::new), chars.next()) {
                (Some(letter), None) => guess(letter).map(|_| ()),
                _ => Ok(()),
            }
        };
        if let Err(err) = result {
            log::warn!("keydown '{key}' failed: {err}");
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn render() -> Result<(), DomError> {
    let game_view = with_game(|g| GameView::from_round(&g.round, &g.languages))?;
    let doc = document()?;

    if let Some(root) = doc.get_element_by_id(ROOT_ID) {
        root.set_class_name(if game_view.show_confetti { "game game--won" } else { "game" });
    }

    if let Some(status) = doc.get_element_by_id(STATUS_ID) {
        status.set_class_name(game_view.status.class_name());
        status.set_text_content(Some(""));
        match &game_view.status {
            StatusMessage::Farewell(text) => {
                child(&doc, &status, "p", "game-status__farewell-message")?
                    .set_text_content(Some(text));
            }
            msg => {
                if let Some((heading, info)) = msg.texts() {
                    child(&doc, &status, "h2", "game-status__status")?
                        .set_text_content(Some(heading));
                    child(&doc, &status, "p", "game-status__info")?.set_text_content(Some(info));
                }
            }
        }
    }

    if let Some(chips) = doc.get_element_by_id(CHIPS_ID) {
        chips.set_text_content(Some(""));
        for chip in &game_view.chips {
            let span = child(&doc, &chips, "span", chip.class_name())?;
            span.set_attribute("style", &chip.style)?;
            span.set_text_content(Some(&chip.name));
        }
    }

    if let Some(word) = doc.get_element_by_id(WORD_ID) {
        word.set_text_content(Some(""));
        for tile in &game_view.tiles {
            child(&doc, &word, "span", tile.class_name())?.set_text_content(Some(&tile.display));
        }
    }

    if let Some(p) = doc.get_element_by_id(GUESS_ANNOUNCE_ID) {
        p.set_text_content(game_view.guess_announcement.as_deref());
    }
    if let Some(p) = doc.get_element_by_id(WORD_ANNOUNCE_ID) {
        p.set_text_content(Some(&game_view.word_announcement));
    }

    for key in &game_view.keys {
        if let Some(el) = doc.get_element_by_id(&key_id(key.letter)) {
            el.set_class_name(&key.class_name());
            el.set_attribute("aria-label", &key.aria_label())?;
            el.set_attribute("aria-disabled", if key.aria_disabled { "true" } else { "false" })?;
            if let Ok(btn) = el.dyn_into::<HtmlButtonElement>() {
                btn.set_disabled(key.disabled);
            }
        }
    }

    if let Some(btn) = doc.get_element_by_id(NEW_GAME_ID) {
        if game_view.show_new_game {
            btn.remove_attribute("hidden")?;
        } else {
            btn.set_attribute("hidden", "")?;
        }
    }
    Ok(())
}

fn child(doc: &Document, parent: &Element, tag: &str, class: &str) -> Result<Element, DomError> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    parent.append_child(&el)?;
    Ok(el)
}
