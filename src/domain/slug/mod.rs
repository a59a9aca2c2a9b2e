// src/domain/slug/mod.rs
//! Slugification of free text into URL-safe tokens.
//!
//! The pipeline is fixed so stored slugs stay reproducible:
//!
//! 1. every run of characters that are neither a Unicode letter nor a digit
//!    becomes a single `-`
//! 2. non-ASCII letters are transliterated to ASCII, unmappable ones dropped
//! 3. anything outside `[A-Za-z0-9_-]` is stripped
//! 4. leading and trailing `-` are trimmed
//! 5. runs of `-` collapse into one
//! 6. the result is lowercased
//!
//! An empty result is replaced by a random token, see [`fallback_token`].
pub mod services;

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

pub use services::{SlugCheck, SlugUniquenessService, UniquenessScope};

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\d]+").expect("separator pattern is valid"));

/// Slugifies `text`, never returning an empty string.
pub fn slugify(text: &str) -> String {
    normalize(text).unwrap_or_else(fallback_token)
}

/// Deterministic part of [`slugify`]. `None` when nothing survives.
pub fn normalize(text: &str) -> Option<String> {
    let separated = SEPARATOR_RUNS.replace_all(text, "-");

    let mut ascii = String::with_capacity(separated.len());
    for ch in separated.chars() {
        if ch.is_ascii() {
            ascii.push(ch);
        } else if let Some(replacement) = deunicode::deunicode_char(ch) {
            // A second pass would split on `_`.
            ascii.extend(replacement.chars().map(|c| if c == '_' { '-' } else { c }));
        }
    }

    let stripped: String = ascii
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    let mut out = String::with_capacity(stripped.len());
    let mut last_dash = false;
    for ch in stripped.trim_matches('-').chars() {
        if ch == '-' {
            if !last_dash {
                out.push('-');
            }
            last_dash = true;
        } else {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        }
    }

    (!out.is_empty()).then_some(out)
}

/// Slugifies a JSON source value. Missing, null and structured values count
/// as empty text.
pub fn slugify_value(value: Option<&Value>) -> String {
    slugify(&source_text(value))
}

pub fn source_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(true)) => "1".to_string(),
        _ => String::new(),
    }
}

/// Turns free text into a slug. Implementations never return an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Random 32-character lowercase hex token. Distinct per call.
pub fn fallback_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
