use std::env;
use std::path::{Path, PathBuf};

use super::env::EnvironmentStore;
use crate::input::HistoryBuffer;

/// Everything a shell session carries between input lines.
///
/// Owned by the main loop and lent to builtins; nothing else holds shell
/// state.
#[derive(Debug, Clone)]
pub struct Session {
    pub env: EnvironmentStore,
    pub history: HistoryBuffer,
    cwd: PathBuf,
}

impl Session {
    pub fn new() -> Result<Self, std::io::Error> {
        Ok(Self::with_env(EnvironmentStore::new(), env::current_dir()?))
    }

    pub fn with_env(env: EnvironmentStore, cwd: PathBuf) -> Self {
        Self {
            env,
            history: HistoryBuffer::new(),
            cwd,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Moves the shell process to `path` and records the resolved directory.
    pub fn change_dir(&mut self, path: &Path) -> Result<(), std::io::Error> {
        env::set_current_dir(path)?;
        self.cwd = env::current_dir()?;
        Ok(())
    }
}
