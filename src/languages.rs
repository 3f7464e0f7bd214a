//! The language track (one entry per life) and farewell flavor text.

use std::borrow::Cow;

/// One life on the track, rendered as a colored chip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Language {
    pub name: Cow<'static, str>,
    pub background_color: Cow<'static, str>,
    pub color: Cow<'static, str>,
}

impl Language {
    pub const fn new(name: &'static str, background_color: &'static str, color: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            background_color: Cow::Borrowed(background_color),
            color: Cow::Borrowed(color),
        }
    }
}

const LIGHT: &str = "#F9F4DA";
const DARK: &str = "#1E1E1E";

/// Default track. Assembly sits last and is never consumed: the round is
/// lost once every language before it is gone.
pub const LANGUAGES: &[Language] = &[
    Language::new("HTML", "#E2680F", LIGHT),
    Language::new("CSS", "#328AF1", LIGHT),
    Language::new("JavaScript", "#F4EB13", DARK),
    Language::new("React", "#2ED3E9", DARK),
    Language::new("TypeScript", "#298EC6", LIGHT),
    Language::new("Node.js", "#599137", LIGHT),
    Language::new("Python", "#FFD742", DARK),
    Language::new("Ruby", "#D02B2B", LIGHT),
    Language::new("Assembly", "#2D519F", LIGHT),
];

// (prefix, suffix) around the language name.
const FAREWELLS: &[(&str, &str)] = &[
    ("Farewell, ", ""),
    ("Adios, ", ""),
    ("R.I.P., ", ""),
    ("We'll miss you, ", ""),
    ("Oh no, not ", "!"),
    ("", " bites the dust"),
    ("Gone but not forgotten, ", ""),
    ("The end of ", " as we know it"),
    ("Off into the sunset, ", ""),
    ("", ", it's been real"),
    ("", ", your watch has ended"),
    ("", " has left the building"),
];

/// Flavor line for losing `name`. The same name always gets the same line.
pub fn farewell_text(name: &str) -> String {
    // FNV-1a
    let hash = name
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325u64, |h, b| (h ^ b as u64).wrapping_mul(0x0100_0000_01b3));
    let (prefix, suffix) = FAREWELLS[(hash % FAREWELLS.len() as u64) as usize];
    format!("{prefix}{name}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farewell_is_stable_and_names_language() {
        for lang in LANGUAGES {
            let text = farewell_text(&lang.name);
            assert!(text.contains(&*lang.name), "'{}' missing name", text);
            assert_eq!(text, farewell_text(&lang.name));
        }
    }

    #[test]
    fn test_default_track_has_nine_lives() {
        assert_eq!(LANGUAGES.len(), 9);
        assert_eq!(LANGUAGES.last().map(|l| &*l.name), Some("Assembly"));
    }
}
