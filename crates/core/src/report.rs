//! Human-readable progress reporting.
//!
//! The extractor never prints directly; frontends pass in a [`Report`] sink.

/// Severity of a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// Sink for progress, warning, and error messages.
pub trait Report {
    fn report(&mut self, level: Level, message: &str);

    fn info(&mut self, message: &str) {
        self.report(Level::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.report(Level::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.report(Level::Error, message);
    }
}

/// Report that keeps every line in memory.
#[derive(Debug, Default)]
pub struct CapturedReport {
    pub lines: Vec<(Level, String)>,
}

impl CapturedReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.lines.iter().filter(|(l, _)| *l == level).map(|(_, m)| m.as_str()).collect()
    }
}

impl Report for CapturedReport {
    fn report(&mut self, level: Level, message: &str) {
        self.lines.push((level, message.to_string()));
    }
}
