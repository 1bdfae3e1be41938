use std::env;
use std::io::Write;

use super::{Builtin, CommandContext, CommandError, Outcome};

#[derive(Clone, Copy, Debug, Default)]
pub struct PwdCommand;

impl Builtin for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        let dir = env::current_dir()?;
        writeln!(ctx.stdout, "{}", dir.display())?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Harness;
    use super::*;
    use crate::test_support::CwdGuard;

    #[test]
    fn test_pwd_after_cd() -> std::io::Result<()> {
        let _guard = CwdGuard::new();
        let dir = tempfile::tempdir()?;

        let mut harness = Harness::new();
        harness.run(&format!("cd {}", dir.path().display()));
        harness.run("pwd");

        let expected = std::fs::canonicalize(dir.path())?;
        assert_eq!(harness.stdout(), format!("{}\n", expected.display()));
        Ok(())
    }
}
