use std::io::Write;

use super::pipeline::{self, Pipeline};
use crate::core::commands::{CommandContext, Outcome};
use crate::error::ShellError;
use crate::process::{PipelineIo, ProcessError};

pub(crate) trait CommandHandler {
    /// Runs one input line. Only a failure to write to `out` or `err` is
    /// returned; command failures are reported on `err`.
    fn execute_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Outcome, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Outcome, ShellError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Outcome::Continue);
        }
        self.session.history.append(line);

        // Builtins are matched on the first token of the whole line; the
        // rest, pipes included, are that builtin's arguments.
        let tokens = pipeline::words(line);
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Outcome::Continue);
        };

        let mut ctx = CommandContext {
            session: &mut self.session,
            stdout: &mut *out,
            stderr: &mut *err,
            highlighter: self.highlighter,
        };
        if let Some(result) = self.builtins.dispatch(&mut ctx, name, args) {
            out.flush()?;
            return match result {
                Ok(outcome) => Ok(outcome),
                Err(e) => {
                    self.report(err, &format!("{}: {}", name, e))?;
                    Ok(Outcome::Continue)
                }
            };
        }

        let Some(pipeline) = Pipeline::parse(line) else {
            return Ok(Outcome::Continue);
        };
        log::debug!("running pipeline of {} stage(s)", pipeline.len());

        out.flush()?;
        let snapshot = self.session.env.snapshot();
        let report = self
            .executor
            .execute(&pipeline, &snapshot, PipelineIo::inherit());

        for error in report.errors() {
            if self.config.quiet && matches!(error, ProcessError::ExitFailure { .. }) {
                continue;
            }
            self.report(err, &error.to_string())?;
        }

        Ok(Outcome::Continue)
    }
}
