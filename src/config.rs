//! Game configuration: which words can come up and which languages make up
//! the life track. Defaults to the built-in data; a page can pass JSON to
//! `start_game_with_config` to override either list.

use crate::error::ConfigError;
use crate::languages::{LANGUAGES, Language};
use crate::rng::IndexSource;
use crate::words::{Corpus, WORDS};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub words: Vec<String>,
    pub languages: Vec<Language>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WORDS.iter().map(|w| w.to_string()).collect(),
            languages: LANGUAGES.to_vec(),
        }
    }
}

impl GameConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Json(e.to_string()))
    }

    /// Checks the word list and the track length. A track needs at least two
    /// languages for a round to tolerate any wrong guess.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.len() < 2 {
            return Err(ConfigError::TooFewLanguages(self.languages.len()));
        }
        if self.words.is_empty() {
            return Err(ConfigError::EmptyCorpus);
        }
        for w in &self.words {
            crate::game::SecretWord::new(w)?;
        }
        Ok(())
    }

    /// Builds the word source for this config.
    pub fn corpus<R: IndexSource>(&self, rng: R) -> Result<Corpus<R>, ConfigError> {
        self.validate()?;
        Corpus::new(self.words.as_slice(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordError;
    use crate::rng::SequenceIndex;
    use crate::words::WordSource;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.languages.len(), 9);
    }

    #[test]
    fn test_validation_errors() {
        let cfg = GameConfig {
            languages: LANGUAGES[..1].to_vec(),
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::TooFewLanguages(1))));

        let cfg = GameConfig {
            words: vec![],
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyCorpus)));

        let cfg = GameConfig {
            words: vec!["".into()],
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Word(WordError::Empty))));
    }

    #[test]
    fn test_corpus_from_config() {
        let cfg = GameConfig {
            words: vec!["go".into(), "rust".into()],
            ..GameConfig::default()
        };
        let mut corpus = cfg.corpus(SequenceIndex::new(vec![1])).unwrap();
        assert_eq!(corpus.next_word().to_string(), "rust");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_json_partial_override() {
        let cfg = GameConfig::from_json(r#"{ "words": ["zig", "go"] }"#).unwrap();
        assert_eq!(cfg.words, vec!["zig", "go"]);
        assert_eq!(cfg.languages, LANGUAGES.to_vec());

        let json = r##"{ "languages": [
            { "name": "C", "backgroundColor": "#555555", "color": "#FFFFFF" },
            { "name": "Assembly", "backgroundColor": "#2D519F", "color": "#F9F4DA" }
        ] }"##;
        let cfg = GameConfig::from_json(json).unwrap();
        assert_eq!(cfg.languages.len(), 2);
        assert_eq!(cfg.languages[0].background_color, "#555555");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_json_rejects_bad_config() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
        assert!(matches!(
            GameConfig::from_json(r#"{ "words": ["c++"] }"#),
            Err(ConfigError::Word(WordError::NotAlphabetic { .. }))
        ));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_default_config_json_round_trip() {
        let cfg = GameConfig::default();
        let back = GameConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(cfg, back);
    }
}
