// src/extract.rs
//
// Per-document record assembly: brand from the file name, store counts from the
// year block, sales from the total row.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::brand;
use crate::core::{html, section};
use crate::record::Record;
use crate::specs::{total_row, year_block};

/// Build the record for one document, whatever it contains.
pub fn assemble(brand: String, doc: &str) -> Record {
    let text = html::strip_tags(section::narrow(doc));
    let tokens = html::tokenize(&text);

    let block = year_block::locate(&tokens).unwrap_or_default();
    let total = total_row::locate(&tokens).unwrap_or_default();
    debug!(brand = %brand, tokens = tokens.len(), year = block.year, "assembled");

    Record {
        brand,
        year: block.year,
        total_stores: block.total_stores,
        new_open: block.new_open,
        terminate: block.terminate,
        cancel: block.cancel,
        transfer: block.transfer,
        avg_sales: total.avg_sales,
        area_sales: total.area_sales,
    }
}

/// The record for a document, or `None` if it carries nothing worth keeping.
pub fn extract_document(brand: String, doc: &str) -> Option<Record> {
    let rec = assemble(brand, doc);
    if rec.is_retained() {
        Some(rec)
    } else {
        debug!(brand = %rec.brand, "dropped: no stores, openings or sales");
        None
    }
}

/// Read and extract one file. A file that can't be read (missing, permissions,
/// not UTF-8) is skipped with a warning.
pub fn extract_file(path: &Path) -> Option<Record> {
    let doc = match fs::read_to_string(path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable document");
            return None;
        }
    };
    extract_document(brand::brand_from_path(path), &doc)
}
