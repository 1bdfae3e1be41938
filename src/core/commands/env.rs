use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use super::{Builtin, CommandContext, CommandError, Outcome};

/// Prints the session environment, one `KEY=VALUE` per line, sorted.
/// Bytes are written as stored.
pub(super) fn print_environment(ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
    let mut lines = ctx.session.env.snapshot().to_lines();
    lines.sort_unstable();
    for line in lines {
        ctx.stdout.write_all(line.as_bytes())?;
        ctx.stdout.write_all(b"\n")?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EnvCommand;

impl Builtin for EnvCommand {
    fn name(&self) -> &'static str {
        "env"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        print_environment(ctx)?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Harness;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    #[test]
    fn test_env_lists_session_variables() {
        let mut harness = Harness::new();
        harness.run("env");

        let out = harness.stdout();
        let lines: Vec<_> = out.lines().collect();
        assert!(lines.contains(&"HOME=/home/test"));
        assert!(lines.contains(&"PATH=/usr/bin:/bin"));
        assert!(lines.iter().any(|l| l.starts_with("LS_COLORS=")));
        assert_eq!(lines.len(), harness.session.env.len());
    }

    #[test]
    fn test_env_writes_raw_bytes() -> Result<(), crate::core::env::EnvError> {
        let mut harness = Harness::new();
        harness
            .session
            .env
            .set(OsStr::from_bytes(b"RAW"), OsStr::from_bytes(b"a\xffb"))?;
        harness.run("env");

        assert!(harness
            .stdout_bytes()
            .split(|b| *b == b'\n')
            .any(|line| line == b"RAW=a\xffb"));
        Ok(())
    }
}
