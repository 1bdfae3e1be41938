use super::{Builtin, CommandContext, CommandError, Outcome};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// `cd [dir]`. Without a directory, goes to `HOME` as inherited by the
/// shell process, not as set in the session environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct CdCommand;

impl CdCommand {
    fn home_dir() -> Result<PathBuf, CommandError> {
        Self::resolve_home(env::var_os("HOME"), dirs::home_dir)
    }

    fn resolve_home(
        home: Option<OsString>,
        fallback: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<PathBuf, CommandError> {
        home.filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(fallback)
            .ok_or_else(|| CommandError::InvalidArguments("HOME not set".into()))
    }
}

impl Builtin for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let target = match args.first() {
            Some(dir) => PathBuf::from(dir),
            None => Self::home_dir()?,
        };

        let metadata = fs::metadata(&target).map_err(|source| CommandError::Filesystem {
            path: target.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(CommandError::NotADirectory(target));
        }

        ctx.session
            .change_dir(&target)
            .map_err(|source| CommandError::Filesystem {
                path: target.clone(),
                source,
            })?;
        Ok(Outcome::Continue)
    }
}
