// src/specs/anchor.rs
//! Anchor-plus-offset extraction.
//!
//! The statistics tables come out of the tokenizer as a flat run of cells with
//! no labels. What is left to go on is position: find a token that anchors a
//! row (a year, the word for "total"), then read fixed offsets after it. Each
//! row convention is described by an [`AnchorSpec`]; [`scan`] evaluates any of
//! them, so a new document layout is a new table entry, not a new code path.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{is_numeric_shaped, normalize};

/// Record fields a spec can fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Year,
    NewOpen,
    Terminate,
    Cancel,
    Transfer,
    TotalStores,
    AvgSales,
    AreaSales,
}

/// What the row-starting token looks like.
pub enum Anchor {
    Pattern(&'static Lazy<Regex>),
    Word(&'static str),
}

impl Anchor {
    fn matches(&self, token: &str) -> bool {
        match self {
            Anchor::Pattern(re) => re.is_match(token),
            Anchor::Word(w) => token == *w,
        }
    }
}

/// Which qualifying anchor wins when there are several.
///
/// Both prefer the row closest to the end of the document. They are kept as
/// separate policies because the year block and the total row were tuned
/// independently; do not fold one into the other without checking real
/// documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    /// Walk forward over every position, keep the last one that qualifies.
    LastForward,
    /// Walk anchors from the end, stop at the first one that qualifies.
    FirstReverse,
}

pub struct AnchorSpec {
    pub name: &'static str,
    pub anchor: Anchor,
    /// Offsets (relative to the anchor) that must all be numeric-shaped.
    pub shaped: &'static [usize],
    /// Always read once the anchor qualifies.
    pub fields: &'static [(Field, usize)],
    /// Read only if the token exists and is numeric-shaped, else 0.
    pub optional: &'static [(Field, usize)],
    pub pick: Pick,
}

impl AnchorSpec {
    /// Furthest offset that has to exist after the anchor.
    fn reach(&self) -> usize {
        self.shaped
            .iter()
            .chain(self.fields.iter().map(|(_, off)| off))
            .copied()
            .max()
            .unwrap_or(0)
    }

    fn qualifies(&self, tokens: &[&str], at: usize) -> bool {
        self.anchor.matches(tokens[at])
            && at + self.reach() < tokens.len()
            && self.shaped.iter().all(|off| is_numeric_shaped(tokens[at + off]))
    }
}

/// One resolved row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Token index of the anchor.
    pub at: usize,
    values: Vec<(Field, i64)>,
}

impl Match {
    /// Normalized value of a field, 0 if the spec doesn't produce it.
    pub fn get(&self, field: Field) -> i64 {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }
}

/// Find the row `spec` describes in `tokens`, following its pick policy.
pub fn scan(tokens: &[&str], spec: &AnchorSpec) -> Option<Match> {
    let at = match spec.pick {
        Pick::LastForward => {
            let mut last = None;
            for i in 0..tokens.len() {
                if spec.qualifies(tokens, i) {
                    last = Some(i);
                }
            }
            last
        }
        Pick::FirstReverse => (0..tokens.len()).rev().find(|&i| spec.qualifies(tokens, i)),
    };

    let Some(at) = at else {
        tracing::debug!(spec = spec.name, tokens = tokens.len(), "no qualifying anchor");
        return None;
    };

    let mut values = Vec::with_capacity(spec.fields.len() + spec.optional.len());
    for &(field, off) in spec.fields {
        values.push((field, normalize(tokens[at + off])));
    }
    for &(field, off) in spec.optional {
        let v = match tokens.get(at + off) {
            Some(t) if is_numeric_shaped(t) => normalize(t),
            _ => 0,
        };
        values.push((field, v));
    }

    Some(Match { at, values })
}
