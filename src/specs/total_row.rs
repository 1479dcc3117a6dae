// src/specs/total_row.rs
//! Average-sales row, anchored on `전체` ("total").
//!
//! `전체 <first figure> <average sales> [<sales per area>]`

use super::anchor::{scan, Anchor, AnchorSpec, Field, Pick};
use crate::config::consts::TOTAL_MARKER;

pub static TOTAL_ROW: AnchorSpec = AnchorSpec {
    name: "total-row",
    anchor: Anchor::Word(TOTAL_MARKER),
    shaped: &[1, 2],
    fields: &[(Field::AvgSales, 2)],
    optional: &[(Field::AreaSales, 3)],
    pick: Pick::FirstReverse,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TotalRow {
    pub avg_sales: i64,
    pub area_sales: i64,
}

pub fn locate(tokens: &[&str]) -> Option<TotalRow> {
    let m = scan(tokens, &TOTAL_ROW)?;
    Some(TotalRow {
        avg_sales: m.get(Field::AvgSales),
        area_sales: m.get(Field::AreaSales),
    })
}
