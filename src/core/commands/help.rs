use std::io::Write;

use super::{Builtin, CommandContext, CommandError, Outcome};

const ENTRIES: &[(&str, &str)] = &[
    ("cd [dir]", "Change directory (default: HOME)"),
    ("clear", "Clear the screen"),
    ("echo [args...]", "Print arguments"),
    ("env", "Display environment variables"),
    ("exit", "Exit the shell"),
    ("export [KEY=VALUE]", "Set environment variables"),
    ("help", "Show this help message"),
    ("history", "Show command history"),
    ("ls [dir]", "List directory contents with colorized output"),
    ("pwd", "Print working directory"),
    ("unset KEY", "Remove environment variable"),
];

#[derive(Clone, Copy, Debug, Default)]
pub struct HelpCommand;

impl Builtin for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        writeln!(ctx.stdout, "Available commands:")?;
        for (usage, description) in ENTRIES {
            writeln!(ctx.stdout, "  {:<19}{}", usage, description)?;
        }
        Ok(Outcome::Continue)
    }
}
