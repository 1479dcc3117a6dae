// src/lib.rs

pub mod config;
pub mod core;
pub mod specs;

pub mod analyze;
pub mod brand;
pub mod error;
pub mod extract;
pub mod progress;
pub mod record;
pub mod report;
pub mod runner;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use error::{Error, Result};
pub use record::Record;
