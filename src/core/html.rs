// src/core/html.rs

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Replace every `<...>` tag with a single space. Entities and text are left alone.
pub fn strip_tags(s: &str) -> String {
    TAG.replace_all(s, " ").into_owned()
}

/// Split stripped text on whitespace. Order is kept; every positional
/// heuristic downstream relies on it.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
