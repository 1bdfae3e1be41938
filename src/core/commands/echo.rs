use std::io::Write;

use super::{Builtin, CommandContext, CommandError, Outcome};

#[derive(Clone, Copy, Debug, Default)]
pub struct EchoCommand;

impl Builtin for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        writeln!(ctx.stdout, "{}", args.join(" "))?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Harness;

    #[test]
    fn test_echo_joins_with_single_spaces() {
        let mut harness = Harness::new();
        harness.run("echo   hello \t world");
        assert_eq!(harness.stdout(), "hello world\n");
    }

    #[test]
    fn test_echo_no_args() {
        let mut harness = Harness::new();
        harness.run("echo");
        assert_eq!(harness.stdout(), "\n");
    }

    #[test]
    fn test_echo_no_escape_processing() {
        let mut harness = Harness::new();
        harness.run(r"echo a\nb | tr a b");
        assert_eq!(harness.stdout(), "a\\nb | tr a b\n");
    }
}
