// src/progress.rs
/// Lightweight progress reporting for the dataset load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when the load starts, with a description of the source.
    fn begin(&mut self, _source: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _ok: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Writes status lines to stderr (CLI).
pub struct StderrProgress;
impl Progress for StderrProgress {
    fn begin(&mut self, source: &str) { eprintln!("Loading {source}"); }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
}
