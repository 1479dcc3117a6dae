// src/core/mod.rs

pub mod html;
pub mod numeric;
pub mod section;

pub use numeric::{is_numeric_shaped, normalize};
