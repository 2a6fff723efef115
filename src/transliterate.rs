//! Default Unicode to ASCII transliteration

use deunicode::deunicode_char;

/// Placeholder for characters with no ASCII approximation
const UNKNOWN: &str = "[?]";

/// Transliterate `text` to ASCII one character at a time
///
/// ASCII passes through unchanged and every Unicode whitespace character
/// becomes a space, so word boundaries survive into the separator pass.
/// Everything else goes through [`deunicode_char`].
///
/// # Examples
/// ```
/// use pretty_slug::transliterate;
///
/// assert_eq!(transliterate("ž\tb"), "z\tb");
/// assert_eq!(transliterate("Nín\u{85}hǎo"), "Nin hao");
/// ```
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else if ch.is_whitespace() {
            out.push(' ');
        } else {
            out.push_str(deunicode_char(ch).unwrap_or(UNKNOWN));
        }
    }
    out
}
