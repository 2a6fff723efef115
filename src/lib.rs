//! # pretty-slug
//!
//! Configurable conversion of arbitrary Unicode text into ASCII slugs.
//!
//! Slugs are human-readable identifiers suitable for URLs, filenames or keys.
//! Input is transliterated to ASCII, whitespace runs become a word separator,
//! characters outside an allowed set are replaced, separator runs are collapsed,
//! and separators or replacements are trimmed from both ends.
//!
//! ## Features
//!
//! - **Transliteration**: non-Latin scripts are approximated in ASCII via [`deunicode`], one character at a time
//! - **Policy knobs**: case folding, word separator, invalid-character replacement, allowed set
//! - **Shareable**: a built [`Slugifier`] is immutable and `Send + Sync`
//! - **`serde`** (optional): load a [`SlugConfig`] from configuration files
//!
//! ## Examples
//!
//! ### Default policy
//!
//! ```rust
//! use pretty_slug::slugify;
//!
//! assert_eq!(slugify("This is a test ---"), "this-is-a-test");
//! assert_eq!(slugify("北京kožušček"), "bei-jing-kozuscek");
//! ```
//!
//! ### Custom policy
//!
//! ```rust
//! use pretty_slug::SlugConfig;
//!
//! let slugifier = SlugConfig::new()
//!     .word_separator("")
//!     .build()
//!     .unwrap();
//!
//! // Replacements of invalid characters are not collapsed
//! assert_eq!(slugifier.slugify("This -- is  a ## test ---"), "this--isa--test");
//! ```
//!
//! ### Malformed policy
//!
//! ```rust
//! use pretty_slug::{SlugConfig, SlugError};
//!
//! let err = SlugConfig::new().allowed_set("z-a").build().unwrap_err();
//! assert!(matches!(err, SlugError::InvalidPattern { .. }));
//! ```

mod config;
mod error;
mod slugify;
mod transliterate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use config::{
    SlugConfig, Slugifier, Transliterate, DEFAULT_ALLOWED_SET, DEFAULT_INVALID_CHAR,
    DEFAULT_WORD_SEPARATOR,
};
pub use error::{Result, SlugError};
pub use slugify::slugify;
pub use transliterate::transliterate;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of this library build
pub fn version() -> &'static str {
    VERSION
}
