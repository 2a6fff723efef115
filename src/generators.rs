//! Property test generators for slug policies and input text
//!
//! Inputs mix ASCII words, accented Latin, CJK, assorted whitespace and
//! punctuation so that every pipeline pass has something to do.

use proptest::prelude::*;

use crate::config::SlugConfig;

/// Generators for slug input text
pub struct TextGenerators;

impl TextGenerators {
    /// Plain ASCII words separated by single spaces
    pub fn ascii_words() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z0-9]{1,8}", 0..=6).prop_map(|words| words.join(" "))
    }

    /// Whitespace of every kind the word splitter has to recognise
    pub fn whitespace() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                Just(' '),
                Just('\t'),
                Just('\n'),
                Just('\r'),
                Just('\u{a0}'),
                Just('\u{2003}'),
                Just('\u{3000}'),
            ],
            1..=4,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    /// Fragments that exercise transliteration and invalid-character handling
    pub fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => "[a-zA-Z0-9]{1,6}",
            1 => "[-_#*.!?/\\\\]{1,4}",
            1 => Just("kožušček".to_string()),
            1 => Just("déjà".to_string()),
            1 => Just("北京".to_string()),
            1 => Just("Привет".to_string()),
            1 => Just("ελληνικά".to_string()),
            1 => Just("🦄".to_string()),
        ]
    }

    /// Fragments glued together with arbitrary whitespace
    pub fn messy_text() -> impl Strategy<Value = String> {
        prop::collection::vec((Self::fragment(), Self::whitespace()), 0..=6).prop_map(|parts| {
            parts
                .into_iter()
                .map(|(fragment, space)| fragment + &space)
                .collect()
        })
    }

    /// Any text at all, weighted towards inputs that look like titles
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![
            2 => Self::ascii_words(),
            3 => Self::messy_text(),
            1 => any::<String>(),
        ]
    }
}

/// Generators for slug policies
pub struct PolicyGenerators;

impl PolicyGenerators {
    /// Single punctuation separators, including regex metacharacters
    pub fn separator() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("-".to_string()),
            Just("_".to_string()),
            Just(".".to_string()),
            Just("*".to_string()),
            Just("+".to_string()),
            Just("^".to_string()),
            Just("$".to_string()),
            Just("|".to_string()),
            Just("".to_string()),
        ]
    }

    /// Replacements for invalid characters
    pub fn replacement() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("-".to_string()),
            Just("_".to_string()),
            Just("#".to_string()),
            Just("~".to_string()),
            Just("".to_string()),
        ]
    }

    /// A complete policy over the default allowed set
    pub fn config() -> impl Strategy<Value = SlugConfig> {
        (Self::separator(), Self::replacement(), any::<bool>()).prop_map(
            |(separator, replacement, to_lower)| {
                SlugConfig::new()
                    .word_separator(separator)
                    .invalid_char(replacement)
                    .to_lower(to_lower)
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_policies_always_build(config in PolicyGenerators::config()) {
            prop_assert!(config.build().is_ok(), "Policy should compile: {:?}", config);
        }

        #[test]
        fn messy_text_contains_whitespace(text in TextGenerators::messy_text()) {
            prop_assert!(text.is_empty() || text.chars().any(char::is_whitespace));
        }

        #[test]
        fn slugs_are_ascii(
            config in PolicyGenerators::config(),
            text in TextGenerators::any_text()
        ) {
            let slug = config.build().unwrap().slugify(&text);
            prop_assert!(slug.is_ascii(), "Slug should be ASCII: {:?}", slug);
        }
    }
}
