pub mod config;
pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod process;

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};

    static CWD_LOCK: Mutex<()> = Mutex::new(());

    /// Serialises tests that move the process working directory and puts
    /// it back afterwards.
    pub(crate) struct CwdGuard {
        original: Option<PathBuf>,
        _lock: MutexGuard<'static, ()>,
    }

    impl CwdGuard {
        pub(crate) fn new() -> Self {
            let lock = CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            Self {
                original: std::env::current_dir().ok(),
                _lock: lock,
            }
        }
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            if let Some(dir) = &self.original {
                let _ = std::env::set_current_dir(dir);
            }
        }
    }
}
