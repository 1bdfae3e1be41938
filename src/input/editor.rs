use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{LineEditor, ReadOutcome};
use crate::error::ShellError;

/// Interactive line editor backed by rustyline, persisting accepted lines
/// to a history file when one is configured.
pub struct RustylineEditor {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl RustylineEditor {
    pub fn new(history_file: Option<PathBuf>) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;

        if let Some(path) = &history_file {
            match editor.load_history(path) {
                Ok(()) => log::debug!("loaded history from {}", path.display()),
                Err(ReadlineError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => log::warn!("couldn't load history from {}: {}", path.display(), e),
            }
        }

        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn record(&mut self, line: &str) -> Result<(), ShellError> {
        self.editor.add_history_entry(line)?;
        if let Some(path) = &self.history_file {
            self.editor.append_history(path)?;
        }
        Ok(())
    }
}
