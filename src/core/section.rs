// src/core/section.rs
//
// Disclosure documents keep the store statistics table under "Ⅱ." (general
// franchise status). Narrowing to that chapter cuts down on stray year/total
// tokens elsewhere in the document.

use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_TWO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)(Ⅱ|II)\s*\.\s*.*?(Ⅲ|III)\s*\.\s*").unwrap());

/// First span running from a "Ⅱ." / "II." heading to the next "Ⅲ." / "III."
/// heading, headings included. Markup is still present.
pub fn section_two(doc: &str) -> Option<&str> {
    SECTION_TWO.find(doc).map(|m| m.as_str())
}

/// The Section II span when present, otherwise the whole document.
pub fn narrow(doc: &str) -> &str {
    match section_two(doc) {
        Some(span) => span,
        None => {
            tracing::debug!("no Section II/III markers, using whole document");
            doc
        }
    }
}
