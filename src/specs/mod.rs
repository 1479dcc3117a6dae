// src/specs/mod.rs
//! # Row “specs”
//!
//! Each spec describes *where one statistics row lives in the token stream* of
//! a disclosure document and *which cells to read from it*.
//!
//! ## What lives here
//! - **Anchor descriptions** (`anchor::AnchorSpec`): the anchor token, the
//!   offsets that must look numeric, and the offsets mapped to record fields.
//! - **Pick policy**: which of several qualifying rows wins.
//! - **Typed wrappers** per row kind (`year_block`, `total_row`) so callers get
//!   named fields instead of a bag of offsets.
//!
//! ## What does **not** live here
//! - Reading files, section narrowing, tag stripping: see `core`.
//! - Retention rules and brand resolution: see `extract` and `brand`.
//! - Plausibility filtering: that happens later, in `analyze`, on the
//!   persisted table.
//!
//! ## Conventions & invariants
//! - Scanners are pure functions over `&[&str]` and return `Option`.
//! - A cell that doesn't parse reads as 0, never as an error.
//! - Both current specs prefer the row nearest the end of the document, through
//!   two different policies (see `anchor::Pick`).
//!
//! ## Adding a layout
//! Write a new `AnchorSpec` static and a small typed `locate` wrapper; no changes
//! to the scanner are needed.
pub mod anchor;
pub mod total_row;
pub mod year_block;

pub use anchor::{scan, AnchorSpec, Field, Match, Pick};
pub use total_row::TotalRow;
pub use year_block::YearBlock;
