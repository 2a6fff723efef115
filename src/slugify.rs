//! The slug rewrite pipeline
//!
//! Passes run once, left to right, and each consumes the previous one's output:
//! transliterate, join words, replace invalid characters, collapse separator
//! runs, trim the edges, fold case.

use std::sync::LazyLock;

use regex::NoExpand;
use tracing::trace;

use crate::config::Slugifier;

static DEFAULT_SLUGIFIER: LazyLock<Slugifier> = LazyLock::new(Slugifier::default);

impl Slugifier {
    /// Turn arbitrary text into a slug
    ///
    /// Never fails. Empty input, or input made only of whitespace and invalid
    /// characters, yields an empty slug.
    ///
    /// # Examples
    /// ```
    /// use pretty_slug::Slugifier;
    ///
    /// let slugifier = Slugifier::new();
    /// assert_eq!(slugifier.slugify("This is a test ---"), "this-is-a-test");
    /// assert_eq!(slugifier.slugify("北京kožušček"), "bei-jing-kozuscek");
    /// assert_eq!(slugifier.slugify("   "), "");
    /// ```
    pub fn slugify(&self, text: &str) -> String {
        let ascii = (self.transliterate)(text);

        let joined = ascii
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(&self.word_separator);

        // Replacements are final: they are not re-checked against the allowed set
        let replaced = self
            .invalid_char_re
            .replace_all(&joined, NoExpand(&self.invalid_char));

        let collapsed = match &self.dup_separator_re {
            Some(re) => re
                .replace_all(&replaced, NoExpand(&self.word_separator))
                .into_owned(),
            None => replaced.into_owned(),
        };

        let mut slug =
            trim_edges(&collapsed, &self.word_separator, &self.invalid_char).to_string();
        if self.to_lower {
            slug.make_ascii_lowercase();
        }

        trace!(input = text, slug = %slug, "slugified");
        slug
    }
}

/// Strip whole occurrences of `separator` or `replacement` from both ends
/// until neither end starts or ends with one. Empty markers are ignored.
fn trim_edges<'a>(mut text: &'a str, separator: &str, replacement: &str) -> &'a str {
    let markers = [separator, replacement];
    loop {
        let before = text.len();
        for marker in markers.iter().filter(|m| !m.is_empty()) {
            text = text.strip_prefix(*marker).unwrap_or(text);
            text = text.strip_suffix(*marker).unwrap_or(text);
        }
        if text.len() == before {
            return text;
        }
    }
}

/// Slugify with the default policy
///
/// # Examples
/// ```
/// assert_eq!(pretty_slug::slugify("___This is a test___"), "this-is-a-test");
/// ```
pub fn slugify(text: &str) -> String {
    DEFAULT_SLUGIFIER.slugify(text)
}
