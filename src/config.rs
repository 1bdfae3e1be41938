use crate::flags::Flags;
use std::path::PathBuf;

const HISTORY_FILE_NAME: &str = ".sluice_history";

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where accepted lines are persisted. `None` disables persistence.
    pub history_file: Option<PathBuf>,
    pub quiet: bool,
    pub debug: bool,
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Self {
        let history_file = match flags.get_value("history") {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME)),
        };

        Config {
            history_file,
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
        }
    }

    /// Default `env_logger` filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    #[test]
    fn test_history_flag_overrides_default() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&["-H".to_string(), "/tmp/custom_history".to_string()])?;

        let config = Config::from_flags(&flags);
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/custom_history")));
        Ok(())
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_flags(&Flags::new());
        assert!(!config.quiet);
        assert_eq!(config.log_filter(), "warn");
        if let Some(path) = &config.history_file {
            assert!(path.ends_with(HISTORY_FILE_NAME));
        }
    }

    #[test]
    fn test_debug_filter() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&["--debug".to_string()])?;
        assert_eq!(Config::from_flags(&flags).log_filter(), "debug");
        Ok(())
    }
}
