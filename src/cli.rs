// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::{AppOptions, TableFormat};
use crate::progress::LogProgress;
use crate::{report, runner};

#[derive(Debug, Parser)]
#[command(
    name = "franchise_scrape",
    version,
    about = "Extract and rank franchise disclosure statistics"
)]
pub struct Cli {
    /// TOML file with extraction/analysis settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract one record per disclosure document into a table
    Extract {
        /// Directory holding the documents
        input: PathBuf,
        /// Output table (default: franchise_data.<format>)
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Document extension to pick up, without the dot
        #[arg(long)]
        ext: Option<String>,
    },
    /// Filter an extracted table and print the rankings
    Analyze {
        /// Table written by `extract`
        table: PathBuf,
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Entries per ranking
        #[arg(long)]
        top: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for TableFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => TableFormat::Csv,
            Format::Tsv => TableFormat::Tsv,
        }
    }
}

/// Merge config file and flags. Flags win.
pub fn resolve_options(cli: &Cli) -> Result<AppOptions> {
    let mut opts = match &cli.config {
        Some(path) => AppOptions::load(path)?,
        None => AppOptions::default(),
    };

    match &cli.command {
        Command::Extract { out, format, ext, .. } => {
            if let Some(f) = format {
                opts.extract.format = (*f).into();
            }
            if let Some(o) = out {
                opts.extract.set_out_path(o);
            }
            if let Some(e) = ext {
                opts.extract.ext = e.trim_start_matches('.').to_string();
            }
        }
        Command::Analyze { format, top, .. } => {
            if let Some(f) = format {
                opts.analyze.format = (*f).into();
            }
            if let Some(n) = top {
                opts.analyze.top_n = *n;
            }
        }
    }
    Ok(opts)
}

pub fn run(cli: Cli) -> Result<()> {
    let opts = resolve_options(&cli)?;

    match &cli.command {
        Command::Extract { input, .. } => {
            let mut progress = LogProgress::new(opts.extract.progress_every);
            let summary = runner::run_extract(input, &opts.extract, Some(&mut progress))
                .wrap_err("extraction aborted")?;
            println!("Done. {} items saved to {}", summary.kept, summary.out.display());
        }
        Command::Analyze { table, .. } => {
            let analysis = runner::run_analyze(table, &opts.analyze).wrap_err("analysis aborted")?;
            print!("{}", report::render(&analysis.rankings(opts.analyze.top_n)));
        }
    }
    Ok(())
}
