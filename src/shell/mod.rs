use std::io::{self, Write};

mod executor;
pub mod pipeline;

use crate::{
    config::Config,
    core::{
        commands::{BuiltinRegistry, Outcome, FAREWELL},
        state::Session,
    },
    error::ShellError,
    highlight::Highlighter,
    input::{LineEditor, ReadOutcome, RustylineEditor},
    process::{signal, PipelineExecutor},
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) editor: Box<dyn LineEditor>,
    pub(crate) session: Session,
    pub(crate) builtins: BuiltinRegistry,
    pub(crate) executor: PipelineExecutor,
    pub(crate) highlighter: Highlighter,
    pub(crate) config: Config,
}

impl Shell {
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let editor = RustylineEditor::new(config.history_file.clone())?;
        signal::setup_interrupt_handler(config.quiet)?;

        let session = Session::new()?;
        Ok(Self::with_editor(config, Box::new(editor), session))
    }

    pub fn with_editor(config: Config, editor: Box<dyn LineEditor>, session: Session) -> Self {
        Shell {
            editor,
            session,
            builtins: BuiltinRegistry::new(),
            executor: PipelineExecutor,
            highlighter: Highlighter::new(),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        self.run_with_io(&mut io::stdout(), &mut io::stderr())
    }

    /// The read-dispatch loop. Returns after `exit` or end of input.
    pub fn run_with_io(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), ShellError> {
        loop {
            let prompt = format!("{} > ", self.session.cwd().display());
            match self.editor.read_line(&prompt) {
                Ok(ReadOutcome::Line(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if let Err(e) = self.editor.record(line) {
                        log::warn!("couldn't add to history: {}", e);
                    }

                    match self.execute_line(line, out, err) {
                        Ok(Outcome::Exit) => break,
                        Ok(Outcome::Continue) => {}
                        Err(e) => log::error!("{}", e),
                    }
                }
                Ok(ReadOutcome::Interrupted) => continue,
                Ok(ReadOutcome::Eof) => {
                    writeln!(out, "{}", FAREWELL)?;
                    break;
                }
                Err(e) => {
                    self.report(err, &e.to_string())?;
                    continue;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    fn report(&self, err: &mut dyn Write, message: &str) -> Result<(), ShellError> {
        self.highlighter.report(err, message)?;
        Ok(())
    }
}
