use super::env::print_environment;
use super::{Builtin, CommandContext, CommandError, Outcome};

/// `export [KEY=VALUE ...]`. Malformed assignments are reported one by one
/// without stopping the rest.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExportCommand;

impl ExportCommand {
    fn parse_export(arg: &str) -> Option<(&str, &str)> {
        arg.split_once('=').filter(|(name, _)| !name.is_empty())
    }
}

impl Builtin for ExportCommand {
    fn name(&self) -> &'static str {
        "export"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        if args.is_empty() {
            print_environment(ctx)?;
            return Ok(Outcome::Continue);
        }

        for arg in args {
            let applied = Self::parse_export(arg)
                .map(|(name, value)| ctx.session.env.set(name, value));

            let message = match applied {
                Some(Ok(())) => continue,
                Some(Err(e)) => format!("export: {}", e),
                None => format!("export: invalid export syntax: {}", arg),
            };
            ctx.highlighter.report(ctx.stderr, &message)?;
        }

        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Harness;
    use super::*;

    #[test]
    fn test_export_simple() {
        let mut harness = Harness::new();
        harness.run("export TEST_VAR=value");
        assert_eq!(harness.session.env.get("TEST_VAR"), "value");
        assert!(harness.stderr().is_empty());
    }

    #[test]
    fn test_export_many() {
        let mut harness = Harness::new();
        harness.run("export A=1 B=2 A=3");
        assert_eq!(harness.session.env.get("A"), "3");
        assert_eq!(harness.session.env.get("B"), "2");
    }

    #[test]
    fn test_export_value_keeps_equals_and_empty() {
        let mut harness = Harness::new();
        harness.run("export OPTS=a=b EMPTY=");
        assert_eq!(harness.session.env.get("OPTS"), "a=b");
        assert!(harness.session.env.contains("EMPTY"));
        assert_eq!(harness.session.env.get("EMPTY"), "");
    }

    #[test]
    fn test_export_invalid_format_continues() {
        let mut harness = Harness::new();
        let result = harness.run("export GOOD=1 INVALID =value LATER=2");

        assert!(matches!(result, Some(Ok(Outcome::Continue))));
        assert_eq!(harness.session.env.get("GOOD"), "1");
        assert_eq!(harness.session.env.get("LATER"), "2");
        assert!(!harness.session.env.contains("INVALID"));

        let err = harness.stderr();
        let lines: Vec<_> = err.lines().collect();
        assert_eq!(
            lines,
            [
                "sluice: export: invalid export syntax: INVALID",
                "sluice: export: invalid export syntax: =value",
            ]
        );
    }

    #[test]
    fn test_export_without_args_lists() {
        let mut harness = Harness::new();
        harness.run("export");
        assert!(harness.stdout().lines().any(|l| l == "HOME=/home/test"));
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(ExportCommand::parse_export("K=V"), Some(("K", "V")));
        assert_eq!(ExportCommand::parse_export("K="), Some(("K", "")));
        assert_eq!(ExportCommand::parse_export("=V"), None);
        assert_eq!(ExportCommand::parse_export("K"), None);
    }
}
