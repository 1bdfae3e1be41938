use std::fmt;
use std::io;
use std::process::ExitStatus;

pub mod executor;
pub mod signal;

pub use executor::{PipelineExecutor, PipelineIo, PipelineReport, StageOutcome, StageReport};

/// Failures while running a pipeline. `stage` is the 1-based position of
/// the stage in its pipeline.
#[derive(Debug)]
pub enum ProcessError {
    StartFailed {
        stage: usize,
        program: String,
        source: io::Error,
    },
    ExitFailure {
        stage: usize,
        program: String,
        status: ExitStatus,
    },
    WaitFailed {
        stage: usize,
        program: String,
        source: io::Error,
    },
    PipeCreation(io::Error),
    Signal(String),
}

impl ProcessError {
    pub fn stage(&self) -> Option<usize> {
        match self {
            ProcessError::StartFailed { stage, .. }
            | ProcessError::ExitFailure { stage, .. }
            | ProcessError::WaitFailed { stage, .. } => Some(*stage),
            ProcessError::PipeCreation(_) | ProcessError::Signal(_) => None,
        }
    }

    pub fn is_start_error(&self) -> bool {
        matches!(self, ProcessError::StartFailed { .. })
    }

    /// Nonzero exit or a failed wait.
    pub fn is_exit_error(&self) -> bool {
        matches!(
            self,
            ProcessError::ExitFailure { .. } | ProcessError::WaitFailed { .. }
        )
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::StartFailed {
                stage,
                program,
                source,
            } => match source.kind() {
                io::ErrorKind::NotFound => {
                    write!(f, "stage {}: command not found: {}", stage, program)
                }
                io::ErrorKind::PermissionDenied => {
                    write!(f, "stage {}: permission denied: {}", stage, program)
                }
                _ => write!(f, "stage {}: failed to start {}: {}", stage, program, source),
            },
            ProcessError::ExitFailure {
                stage,
                program,
                status,
            } => write!(f, "stage {}: {} exited with {}", stage, program, status),
            ProcessError::WaitFailed {
                stage,
                program,
                source,
            } => write!(f, "stage {}: failed to wait for {}: {}", stage, program, source),
            ProcessError::PipeCreation(e) => write!(f, "failed to create pipe: {}", e),
            ProcessError::Signal(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::StartFailed { source, .. } | ProcessError::WaitFailed { source, .. } => {
                Some(source)
            }
            ProcessError::PipeCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ctrlc::Error> for ProcessError {
    fn from(err: ctrlc::Error) -> Self {
        ProcessError::Signal(err.to_string())
    }
}
