// src/brand.rs
//! Brand label from a disclosure file name.
//!
//! Two naming conventions show up in the wild:
//! - `정보공개서_<corp>_<brand>_<year>` (or without the corp part): the brand is
//!   the last part that is neither the marker nor a year.
//! - `<brand>_<corp>_<year>`: the brand comes first.
//!
//! Nothing here checks that the result really is a brand. Corporate names and
//! duplicates slip through and downstream code has to live with that.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{BRAND_DELIM, DISCLOSURE_MARKER};

static YEAR_PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"^20\d\d$").unwrap());

/// Resolve a brand from a file stem (no extension).
pub fn brand_name(stem: &str) -> String {
    let parts: Vec<&str> = stem.split(BRAND_DELIM).collect();

    if parts[0] != DISCLOSURE_MARKER {
        return parts[0].to_string();
    }

    let candidates: Vec<&str> = parts
        .iter()
        .copied()
        .filter(|p| !YEAR_PART.is_match(p) && *p != DISCLOSURE_MARKER)
        .collect();

    match candidates.as_slice() {
        [] => stem.to_string(),
        [only] => only.to_string(),
        [.., last] => last.to_string(),
    }
}

/// Resolve a brand from a document path, using its stem.
pub fn brand_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    brand_name(&stem)
}
