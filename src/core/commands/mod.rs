use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

mod cd;
mod clear;
mod echo;
mod env;
mod exit;
mod export;
mod help;
mod history;
mod ls;
mod pwd;
mod unset;

pub use cd::CdCommand;
pub use clear::ClearCommand;
pub use echo::EchoCommand;
pub use env::EnvCommand;
pub use exit::{ExitCommand, FAREWELL};
pub use export::ExportCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use ls::LsCommand;
pub use pwd::PwdCommand;
pub use unset::UnsetCommand;

use crate::core::state::Session;
use crate::highlight::Highlighter;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },
    NotADirectory(PathBuf),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::Filesystem { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            CommandError::NotADirectory(path) => write!(f, "{}: not a directory", path.display()),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Filesystem { source, .. } => Some(source),
            CommandError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the main loop should do after a builtin ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Everything a builtin may touch while it runs.
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    pub highlighter: Highlighter,
}

/// A command executed inside the shell process.
///
/// `args` are the raw whitespace-separated tokens that followed the name on
/// the input line, pipe characters included.
pub trait Builtin {
    fn name(&self) -> &'static str;

    /// Whether this builtin handles the line at all. Declined lines run as
    /// an external pipeline instead.
    fn claims(&self, _args: &[String]) -> bool {
        true
    }

    fn validate(&self, _args: &[String]) -> Result<(), CommandError> {
        Ok(())
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError>;
}

/// Builtins by name.
pub struct BuiltinRegistry {
    commands: BTreeMap<&'static str, Box<dyn Builtin>>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(Box::new(CdCommand));
        registry.register(Box::new(ClearCommand));
        registry.register(Box::new(EchoCommand));
        registry.register(Box::new(EnvCommand));
        registry.register(Box::new(ExitCommand));
        registry.register(Box::new(ExportCommand));
        registry.register(Box::new(HelpCommand));
        registry.register(Box::new(HistoryCommand));
        registry.register(Box::new(LsCommand));
        registry.register(Box::new(PwdCommand));
        registry.register(Box::new(UnsetCommand));

        registry
    }

    pub fn empty() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Adds a builtin, replacing any previous one with the same name.
    pub fn register(&mut self, command: Box<dyn Builtin>) {
        self.commands.insert(command.name(), command);
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// The builtin that takes this line, if any.
    pub fn resolve(&self, name: &str, args: &[String]) -> Option<&dyn Builtin> {
        self.commands
            .get(name)
            .map(|command| &**command)
            .filter(|command| command.claims(args))
    }

    /// Runs `name` when a builtin claims it. `None` means the line is not a
    /// builtin and belongs to the pipeline executor.
    pub fn dispatch(
        &self,
        ctx: &mut CommandContext<'_>,
        name: &str,
        args: &[String],
    ) -> Option<Result<Outcome, CommandError>> {
        let command = self.resolve(name, args)?;
        log::debug!("builtin {} with {:?}", name, args);
        Some(
            command
                .validate(args)
                .and_then(|()| command.execute(ctx, args)),
        )
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Harness;
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = BuiltinRegistry::new();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            ["cd", "clear", "echo", "env", "exit", "export", "help", "history", "ls", "pwd", "unset"]
        );
        assert!(!registry.is_builtin("grep"));
        assert!(!registry.is_builtin(""));
    }

    #[test]
    fn test_dispatch_table() {
        let cases: &[(&str, bool)] = &[
            ("echo hi", true),
            ("cd", true),
            ("history", true),
            ("ls", true),
            ("ls /tmp", true),
            ("ls -l", false),
            ("ls --help", false),
            ("ls | wc -l", false),
            ("grep foo", false),
            ("tr a b", false),
        ];

        let registry = BuiltinRegistry::new();
        for (line, expected) in cases {
            let tokens = crate::shell::pipeline::words(line);
            let claimed = registry.resolve(&tokens[0], &tokens[1..]).is_some();
            assert_eq!(claimed, *expected, "line: {}", line);
        }
    }

    #[test]
    fn test_unknown_command_not_dispatched() {
        let mut harness = Harness::new();
        assert!(harness.run("unknown_command arg").is_none());
        assert!(harness.stdout().is_empty());
    }

    #[test]
    fn test_export_env_unset_interaction() {
        let mut harness = Harness::new();

        assert!(matches!(harness.run("export FOO=bar"), Some(Ok(Outcome::Continue))));
        harness.clear_output();
        assert!(matches!(harness.run("env"), Some(Ok(Outcome::Continue))));
        assert!(harness.stdout().lines().any(|l| l == "FOO=bar"));

        assert!(matches!(harness.run("unset FOO"), Some(Ok(Outcome::Continue))));
        harness.clear_output();
        harness.run("env");
        assert!(!harness.stdout().lines().any(|l| l.starts_with("FOO=")));
    }

    struct Counter;

    impl Builtin for Counter {
        fn name(&self) -> &'static str {
            "count"
        }

        fn validate(&self, args: &[String]) -> Result<(), CommandError> {
            if args.is_empty() {
                return Err(CommandError::InvalidArguments("usage: count ARG...".into()));
            }
            Ok(())
        }

        fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
            writeln!(ctx.stdout, "{}", args.len())?;
            Ok(Outcome::Continue)
        }
    }

    #[test]
    fn test_registered_builtin_is_validated_before_execution() {
        let mut harness = Harness::new();
        harness.registry.register(Box::new(Counter));

        assert!(matches!(
            harness.run("count"),
            Some(Err(CommandError::InvalidArguments(_)))
        ));
        assert!(harness.stdout().is_empty());

        assert!(matches!(harness.run("count a b c"), Some(Ok(Outcome::Continue))));
        assert_eq!(harness.stdout(), "3\n");
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::InvalidArguments("bad args".to_string()),
            CommandError::Filesystem {
                path: PathBuf::from("/nope"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            },
            CommandError::NotADirectory(PathBuf::from("/etc/passwd")),
            CommandError::IoError(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "io error",
            )),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
