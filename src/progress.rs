// src/progress.rs
/// Console-facing status sink used by the runner.
/// Diagnostics go through `tracing`; this carries the user-visible lines
/// (banners, summary, comparison tables).
pub trait Progress {
    /// One line of output for human eyes.
    fn line(&mut self, _msg: &str) {}

    /// Called once per file the run produced.
    fn file_written(&mut self, _path: &std::path::Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints every line to stdout.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn line(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Keeps every line; handy for callers that want the transcript.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub files: Vec<std::path::PathBuf>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn line(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn file_written(&mut self, path: &std::path::Path) {
        self.files.push(path.to_path_buf());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
