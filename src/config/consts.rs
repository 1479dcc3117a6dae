// src/config/consts.rs

// Document conventions
pub const DISCLOSURE_MARKER: &str = "정보공개서";
pub const BRAND_DELIM: char = '_';
pub const TOTAL_MARKER: &str = "전체";

// Extraction
pub const DEFAULT_EXT: &str = "html";
pub const DEFAULT_OUT_FILE: &str = "franchise_data.csv";
pub const PROGRESS_EVERY: usize = 100;

// Anomaly filter (sales in thousand won)
pub const MAX_NEW_OPEN: i64 = 20_000; // largest convenience-store chains
pub const MAX_CLOSURES: i64 = 20_000;
pub const SUSPICIOUS_YEAR_MIN: i64 = 2019;
pub const SUSPICIOUS_YEAR_MAX: i64 = 2025;
pub const SMALL_SYSTEM_STORES: i64 = 1_000;
pub const MAX_AVG_SALES: i64 = 5_000_000;

// Report
pub const TOP_N: usize = 10;
