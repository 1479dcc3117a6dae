// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};

/// Everything both stages can be tuned with. Loaded from an optional TOML
/// file; every key may be omitted.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub analyze: AnalyzeOptions,
}

impl AppOptions {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&text).map_err(|e| Error::Config { path: path.to_path_buf(), source: e })
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Csv,
    Tsv,
}

impl TableFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Tsv => "tsv",
        }
    }

    pub fn delim(&self) -> u8 {
        match self {
            TableFormat::Csv => b',',
            TableFormat::Tsv => b'\t',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Extension of the documents to pick up (no dot).
    pub ext: String,
    out: Option<PathBuf>,
    pub format: TableFormat,
    /// Emit a progress notice every N documents (0 = never).
    pub progress_every: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            ext: DEFAULT_EXT.to_string(),
            out: None,
            format: TableFormat::Csv,
            progress_every: PROGRESS_EVERY,
        }
    }
}

impl ExtractOptions {
    /// Explicit output path if one was given, otherwise the default file name
    /// with the extension of the current format.
    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            Some(p) => p.clone(),
            None => Path::new(DEFAULT_OUT_FILE).with_extension(self.format.ext()),
        }
    }

    pub fn set_out_path(&mut self, path: impl Into<PathBuf>) {
        self.out = Some(path.into());
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyzeOptions {
    pub format: TableFormat,
    pub top_n: usize,
    pub thresholds: FilterThresholds,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            format: TableFormat::Csv,
            top_n: TOP_N,
            thresholds: FilterThresholds::default(),
        }
    }
}

/// Plausibility limits for the anomaly filter. Sales are in thousand won.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterThresholds {
    pub max_new_open: i64,
    pub max_closures: i64,
    pub suspicious_year_min: i64,
    pub suspicious_year_max: i64,
    pub small_system_stores: i64,
    pub max_avg_sales: i64,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            max_new_open: MAX_NEW_OPEN,
            max_closures: MAX_CLOSURES,
            suspicious_year_min: SUSPICIOUS_YEAR_MIN,
            suspicious_year_max: SUSPICIOUS_YEAR_MAX,
            small_system_stores: SMALL_SYSTEM_STORES,
            max_avg_sales: MAX_AVG_SALES,
        }
    }
}

impl FilterThresholds {
    #[inline]
    pub fn looks_like_year(&self, n: i64) -> bool {
        (self.suspicious_year_min..=self.suspicious_year_max).contains(&n)
    }
}
