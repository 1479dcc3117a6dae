// src/record.rs
use serde::Serialize;

/// One row of the extracted table, one per source document.
///
/// Counts read as 0 when the document didn't yield them. Sales figures are in
/// thousand won. Field order is the column order of the persisted table.
///
/// Counts are signed so that whatever gets written here parses back in the
/// analysis pass; they are never negative.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub brand: String,
    pub year: u32,
    pub total_stores: i64,
    pub new_open: i64,
    pub terminate: i64,
    pub cancel: i64,
    pub transfer: i64,
    pub avg_sales: i64,
    pub area_sales: i64,
}

impl Record {
    pub const HEADERS: [&'static str; 9] = [
        "brand", "year", "total_stores", "new_open", "terminate",
        "cancel", "transfer", "avg_sales", "area_sales",
    ];

    /// A record with no store count, no openings and no sales carries nothing
    /// worth keeping; it is almost always a document the locators missed.
    pub fn is_retained(&self) -> bool {
        self.total_stores > 0 || self.new_open > 0 || self.avg_sales > 0
    }
}
