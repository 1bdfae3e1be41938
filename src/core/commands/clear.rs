use std::io::Write;

use super::{Builtin, CommandContext, CommandError, Outcome};
use crate::core::terminal;

#[derive(Clone, Copy, Debug, Default)]
pub struct ClearCommand;

impl Builtin for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        ctx.stdout.flush()?;
        terminal::clear_screen(&ctx.session.env.snapshot())?;
        Ok(Outcome::Continue)
    }
}
