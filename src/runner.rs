// src/runner.rs
//
// Batch drivers for the two stages. Each one runs to completion on its own;
// the only thing the second reads from the first is the table file.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::analyze::{self, Analysis};
use crate::config::{AnalyzeOptions, ExtractOptions};
use crate::error::{Error, Result};
use crate::extract;
use crate::progress::Progress;
use crate::store::{self, TableWriter};

/// What an extraction run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractSummary {
    pub documents: usize,
    pub kept: usize,
    pub out: PathBuf,
}

/// Documents with extension `ext` directly inside `dir`, sorted by file name
/// so that reruns write rows in the same order.
pub fn list_documents(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InputDir {
            path: dir.to_path_buf(),
            reason: "not a directory".into(),
        });
    }

    let mut docs = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::InputDir {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(ext) {
            docs.push(path.to_path_buf());
        }
    }
    Ok(docs)
}

/// Extract every document in `input` into the table at `opts.out_path()`.
/// A document that can't be read is skipped; failing to list the input or to
/// write the table aborts the run.
pub fn run_extract(
    input: &Path,
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ExtractSummary> {
    let docs = list_documents(input, &opts.ext)?;
    let out = opts.out_path();
    let mut writer = TableWriter::create(&out, opts.format)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(docs.len());
        if docs.is_empty() {
            p.log(&format!("No .{} documents in {}", opts.ext, input.display()));
        }
    }

    for (i, path) in docs.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.item_start(i);
        }
        if let Some(rec) = extract::extract_file(path) {
            writer.write(&rec)?;
        }
    }

    let kept = writer.finish()?;
    if let Some(p) = progress.as_deref_mut() {
        p.finish(kept);
    }

    Ok(ExtractSummary { documents: docs.len(), kept, out })
}

/// Read a table back and filter it. Ranking and rendering are left to the
/// caller so the top-N size stays a presentation concern.
pub fn run_analyze(table: &Path, opts: &AnalyzeOptions) -> Result<Analysis> {
    let rows = store::read_table(table, opts.format)?;
    let analysis = analyze::analyze(&rows, &opts.thresholds);
    tracing::info!(
        rows = rows.len(),
        kept = analysis.entries.len(),
        dropped = analysis.dropped.total(),
        "table analyzed"
    );
    Ok(analysis)
}
