use super::{Builtin, CommandContext, CommandError, Outcome};

#[derive(Clone, Copy, Debug, Default)]
pub struct UnsetCommand;

impl Builtin for UnsetCommand {
    fn name(&self) -> &'static str {
        "unset"
    }

    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments("Usage: unset KEY".into()));
        }
        Ok(())
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        for name in args {
            ctx.session.env.unset(name);
        }
        Ok(Outcome::Continue)
    }
}
