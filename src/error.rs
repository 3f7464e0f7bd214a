//! Boundary errors. Game rules themselves never fail; these cover word
//! validation, configuration loading and DOM setup.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("secret word is empty")]
    Empty,
    #[error("secret word '{word}' contains non-letter character '{found}'")]
    NotAlphabetic { word: String, found: char },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("word corpus is empty")]
    EmptyCorpus,
    #[error("language track needs at least 2 entries, got {0}")]
    TooFewLanguages(usize),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("invalid game config: {0}")]
    Json(String),
}

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no body")]
    NoBody,
    #[error("game not started")]
    NotStarted,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
