use std::io::Write;

use super::{Builtin, CommandContext, CommandError, Outcome};

#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryCommand;

impl Builtin for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        for (number, line) in ctx.session.history.numbered() {
            writeln!(ctx.stdout, "{}  {}", number, line)?;
        }
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Harness;

    #[test]
    fn test_history_numbered_from_one() {
        let mut harness = Harness::new();
        for line in ["echo test", "pwd", "pwd", "history"] {
            harness.session.history.append(line);
        }

        harness.run("history");
        assert_eq!(harness.stdout(), "1  echo test\n2  pwd\n3  history\n");
    }

    #[test]
    fn test_history_empty() {
        let mut harness = Harness::new();
        harness.run("history");
        assert!(harness.stdout().is_empty());
    }
}
