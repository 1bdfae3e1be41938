mod editor;
pub mod history;

pub use editor::RustylineEditor;
pub use history::HistoryBuffer;

use crate::error::ShellError;

/// Result of asking the line editor for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

/// Source of input lines and sink for accepted ones.
pub trait LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;

    /// Persists a line the shell has accepted into its history.
    fn record(&mut self, line: &str) -> Result<(), ShellError>;
}
