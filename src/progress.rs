// src/progress.rs
/// Progress reporting for the extraction batch. Kept out of the data output:
/// whatever a sink prints goes to the log, never into the table.
pub trait Progress {
    /// Called at the start with the number of documents found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called before document `index` (0-based) is processed.
    fn item_start(&mut self, _index: usize) {}

    /// Called at the end with the number of records kept.
    fn finish(&mut self, _kept: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Emits `Processing i/total...` every `every` documents (including the first)
/// and a summary at the end, as `tracing` info events.
pub struct LogProgress {
    every: usize,
    total: usize,
}

impl LogProgress {
    pub fn new(every: usize) -> Self {
        Self { every, total: 0 }
    }

    fn due(&self, index: usize) -> bool {
        self.every > 0 && index % self.every == 0
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn item_start(&mut self, index: usize) {
        if self.due(index) {
            tracing::info!("Processing {}/{}...", index, self.total);
        }
    }

    fn finish(&mut self, kept: usize) {
        tracing::info!(documents = self.total, kept, "extraction finished");
    }
}
