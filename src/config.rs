//! Slug policy and the compiled slugifier
//!
//! A [`SlugConfig`] is a bag of optional knobs. Knobs that were never set are
//! filled with their defaults when [`SlugConfig::build`] runs, so setters can be
//! chained in any order. Building compiles the two matchers the pipeline needs
//! into an immutable [`Slugifier`].

use std::fmt;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Result, SlugError};
use crate::transliterate::transliterate;

/// Default word separator
pub const DEFAULT_WORD_SEPARATOR: &str = "-";

/// Default replacement for characters outside the allowed set
pub const DEFAULT_INVALID_CHAR: &str = "-";

/// Default allowed set, as the body of a regex character class
pub const DEFAULT_ALLOWED_SET: &str = "a-zA-Z0-9";

/// Unicode to ASCII transliteration step
pub type Transliterate = fn(&str) -> String;

/// Slug policy
///
/// # Examples
/// ```
/// use pretty_slug::SlugConfig;
///
/// let slugifier = SlugConfig::new()
///     .to_lower(false)
///     .invalid_char("#")
///     .word_separator("*")
///     .build()
///     .unwrap();
///
/// assert_eq!(slugifier.slugify("This -- is a ## test"), "This*##*is*a*##*test");
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SlugConfig {
    to_lower: Option<bool>,
    word_separator: Option<String>,
    invalid_char: Option<String>,
    allowed_set: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    transliterator: Option<Transliterate>,
}

impl SlugConfig {
    /// Create a policy with every knob unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the slug is lowercased (ASCII only). Defaults to `true`.
    pub fn to_lower(mut self, to_lower: bool) -> Self {
        self.to_lower = Some(to_lower);
        self
    }

    /// String that joins whitespace-separated words. Defaults to `"-"`.
    ///
    /// The separator is always allowed, runs of it are collapsed to one
    /// occurrence and it is trimmed from both ends of the slug. It may be empty.
    /// A word equal to the separator merges into the separators around it,
    /// so with separator `"ab"` the text `"x ab y"` becomes `"xaby"`.
    pub fn word_separator(mut self, separator: impl Into<String>) -> Self {
        self.word_separator = Some(separator.into());
        self
    }

    /// String substituted for every character outside the allowed set. Defaults to `"-"`.
    ///
    /// Each invalid character is replaced on its own; runs of replacements are
    /// not collapsed, but they are trimmed from both ends of the slug. It may be
    /// empty, in which case invalid characters are deleted.
    pub fn invalid_char(mut self, replacement: impl Into<String>) -> Self {
        self.invalid_char = Some(replacement.into());
        self
    }

    /// Characters passed through untouched, written as the body of a regex
    /// character class without the brackets. Defaults to `"a-zA-Z0-9"`.
    ///
    /// Metacharacters must be escaped by the caller.
    pub fn allowed_set(mut self, allowed_set: impl Into<String>) -> Self {
        self.allowed_set = Some(allowed_set.into());
        self
    }

    /// Replace the default [`transliterate`](crate::transliterate) step
    pub fn transliterator(mut self, transliterate: Transliterate) -> Self {
        self.transliterator = Some(transliterate);
        self
    }

    /// Resolve defaults and compile the matchers
    ///
    /// Fails with [`SlugError::InvalidPattern`] when the allowed set (combined
    /// with the escaped separator) is not a valid character class.
    ///
    /// # Examples
    /// ```
    /// use pretty_slug::SlugConfig;
    ///
    /// assert!(SlugConfig::new().allowed_set("z-a").build().is_err());
    /// ```
    pub fn build(&self) -> Result<Slugifier> {
        let to_lower = self.to_lower.unwrap_or(true);
        let word_separator = self
            .word_separator
            .clone()
            .unwrap_or_else(|| DEFAULT_WORD_SEPARATOR.to_string());
        let invalid_char = self
            .invalid_char
            .clone()
            .unwrap_or_else(|| DEFAULT_INVALID_CHAR.to_string());
        let allowed_set = self
            .allowed_set
            .clone()
            .unwrap_or_else(|| DEFAULT_ALLOWED_SET.to_string());
        let transliterate = self.transliterator.unwrap_or(transliterate);

        let escaped_separator = regex::escape(&word_separator);
        let invalid_char_re = compile(&format!("[^{escaped_separator}{allowed_set}]"))?;
        let dup_separator_re = if word_separator.is_empty() {
            None
        } else {
            Some(compile(&format!("(?:{escaped_separator}){{2,}}"))?)
        };

        debug!(
            separator = %word_separator,
            replacement = %invalid_char,
            invalid = invalid_char_re.as_str(),
            duplicates = dup_separator_re.as_ref().map(Regex::as_str),
            "built slugifier"
        );

        Ok(Slugifier {
            to_lower,
            word_separator,
            invalid_char,
            allowed_set,
            transliterate,
            invalid_char_re,
            dup_separator_re,
        })
    }
}

impl fmt::Debug for SlugConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlugConfig")
            .field("to_lower", &self.to_lower)
            .field("word_separator", &self.word_separator)
            .field("invalid_char", &self.invalid_char)
            .field("allowed_set", &self.allowed_set)
            .field("custom_transliterator", &self.transliterator.is_some())
            .finish()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| {
        warn!(pattern, error = %err, "slug policy does not compile");
        SlugError::invalid_pattern(pattern, &err)
    })
}

/// A compiled slug policy
///
/// Immutable once built, so one instance can be shared between threads.
/// To change a knob, go back through [`Slugifier::to_config`] and rebuild.
#[derive(Clone)]
pub struct Slugifier {
    pub(crate) to_lower: bool,
    pub(crate) word_separator: String,
    pub(crate) invalid_char: String,
    pub(crate) allowed_set: String,
    pub(crate) transliterate: Transliterate,
    pub(crate) invalid_char_re: Regex,
    pub(crate) dup_separator_re: Option<Regex>,
}

impl Slugifier {
    /// Slugifier with the default policy: lowercase, `-` separator, `-`
    /// replacement and `a-zA-Z0-9` allowed
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether slugs are lowercased
    pub fn lowercases(&self) -> bool {
        self.to_lower
    }

    /// Resolved word separator
    pub fn word_separator(&self) -> &str {
        &self.word_separator
    }

    /// Resolved replacement for invalid characters
    pub fn invalid_char(&self) -> &str {
        &self.invalid_char
    }

    /// Resolved allowed set, without brackets
    pub fn allowed_set(&self) -> &str {
        &self.allowed_set
    }

    /// Fully resolved policy this slugifier was built from
    pub fn to_config(&self) -> SlugConfig {
        SlugConfig {
            to_lower: Some(self.to_lower),
            word_separator: Some(self.word_separator.clone()),
            invalid_char: Some(self.invalid_char.clone()),
            allowed_set: Some(self.allowed_set.clone()),
            transliterator: Some(self.transliterate),
        }
    }
}

impl Default for Slugifier {
    fn default() -> Self {
        SlugConfig::new()
            .build()
            .expect("default slug policy compiles")
    }
}

impl fmt::Debug for Slugifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slugifier")
            .field("to_lower", &self.to_lower)
            .field("word_separator", &self.word_separator)
            .field("invalid_char", &self.invalid_char)
            .field("allowed_set", &self.allowed_set)
            .field("invalid_char_re", &self.invalid_char_re.as_str())
            .field(
                "dup_separator_re",
                &self.dup_separator_re.as_ref().map(Regex::as_str),
            )
            .finish_non_exhaustive()
    }
}
