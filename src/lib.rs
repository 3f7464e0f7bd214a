//! Assembly Endgame core crate.
//!
//! Guess the hidden word letter by letter. Every wrong letter costs one
//! programming language from the track; lose all but the last and Assembly
//! wins. Round rules (`game`) and the render model (`view`) are plain Rust
//! and run natively in tests; `dom` wires them to the page.

use wasm_bindgen::prelude::*;

pub mod config;
mod dom;
pub mod error;
pub mod game;
pub mod languages;
pub mod rng;
pub mod view;
pub mod words;

pub use config::GameConfig;
pub use error::{ConfigError, DomError, WordError};
pub use game::{GuessOutcome, Letter, Round, SecretWord, Status};
pub use languages::{LANGUAGES, Language, farewell_text};
pub use view::GameView;
pub use words::{Corpus, WORDS, WordSource, random_word};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Already initialized when the module is instantiated twice; keep the first logger.
    let _ = console_log::init_with_level(level);
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

/// Mounts the game with the built-in word list and language track.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    dom::mount(GameConfig::default())?;
    Ok(())
}

/// Mounts the game with a JSON config (`{"words": [...], "languages": [...]}`);
/// missing keys fall back to the built-in data.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    dom::mount(config)?;
    Ok(())
}

/// Starts a fresh round on the mounted game.
#[wasm_bindgen]
pub fn new_game() -> Result<(), JsValue> {
    dom::new_game()?;
    Ok(())
}

/// Guesses `letter` on the mounted game. Returns whether the guess changed
/// the round (false for repeats, non-letters and finished rounds).
#[wasm_bindgen]
pub fn guess(letter: char) -> Result<bool, JsValue> {
    match Letter::new(letter) {
        Some(l) => Ok(dom::guess(l)?.accepted()),
        None => Ok(false),
    }
}
