// src/specs/year_block.rs
//! Yearly store-count row.
//!
//! Layout after the year cell (one reporting year per row):
//! `<year> <stores at start> <new> <terminated> <cancelled> <transferred> <stores at end>`
//!
//! The start-of-year count is skipped; the end-of-year count is what we report
//! as `total_stores`. When several year rows qualify the last one wins, which in
//! these tables is the most recent year.

use once_cell::sync::Lazy;
use regex::Regex;

use super::anchor::{scan, Anchor, AnchorSpec, Field, Pick};

static YEAR_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^20[12][0-9]$").unwrap());

pub static YEAR_BLOCK: AnchorSpec = AnchorSpec {
    name: "year-block",
    anchor: Anchor::Pattern(&YEAR_TOKEN),
    shaped: &[1, 2, 3, 4, 5, 6],
    fields: &[
        (Field::Year, 0),
        (Field::NewOpen, 2),
        (Field::Terminate, 3),
        (Field::Cancel, 4),
        (Field::Transfer, 5),
        (Field::TotalStores, 6),
    ],
    optional: &[],
    pick: Pick::LastForward,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct YearBlock {
    pub year: u32,
    pub new_open: i64,
    pub terminate: i64,
    pub cancel: i64,
    pub transfer: i64,
    pub total_stores: i64,
}

pub fn locate(tokens: &[&str]) -> Option<YearBlock> {
    let m = scan(tokens, &YEAR_BLOCK)?;
    Some(YearBlock {
        // The anchor pattern only admits 2010..=2029.
        year: m.get(Field::Year) as u32,
        new_open: m.get(Field::NewOpen),
        terminate: m.get(Field::Terminate),
        cancel: m.get(Field::Cancel),
        transfer: m.get(Field::Transfer),
        total_stores: m.get(Field::TotalStores),
    })
}
