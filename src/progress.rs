// src/progress.rs
/// Lightweight status reporting for load/export runs.
/// Frontends (GUI/CLI) implement this to surface progress to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
