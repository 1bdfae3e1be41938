use std::io::Write;

use super::{Builtin, CommandContext, CommandError, Outcome};

pub const FAREWELL: &str = "Goodbye!";

/// Ends the main loop. The process itself is left to exit normally.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExitCommand;

impl Builtin for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        writeln!(ctx.stdout, "{}", FAREWELL)?;
        Ok(Outcome::Exit)
    }
}
