use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{Child, Command, ExitStatus, Stdio};

use os_pipe::{PipeReader, PipeWriter};

use super::ProcessError;
use crate::core::env::Snapshot;
use crate::shell::pipeline::{Pipeline, PipelineStage};

/// Inserted before the arguments of every externally run `ls`.
const LS_COLOR_FLAG: &str = "--color=auto";

/// Streams bound to the two open ends of a pipeline. An end left as `None`
/// is bound to the shell's own stream.
#[derive(Debug, Default)]
pub struct PipelineIo {
    pub stdin: Option<Stdio>,
    pub stdout: Option<Stdio>,
}

impl PipelineIo {
    pub fn inherit() -> Self {
        Self::default()
    }

    pub fn with_stdin(mut self, stdin: impl Into<Stdio>) -> Self {
        self.stdin = Some(stdin.into());
        self
    }

    pub fn with_stdout(mut self, stdout: impl Into<Stdio>) -> Self {
        self.stdout = Some(stdout.into());
        self
    }
}

#[derive(Debug)]
pub enum StageOutcome {
    Exited(ExitStatus),
    Failed(ProcessError),
}

#[derive(Debug)]
pub struct StageReport {
    /// 1-based position in the pipeline.
    pub position: usize,
    pub program: String,
    pub outcome: StageOutcome,
}

impl StageReport {
    pub fn error(&self) -> Option<&ProcessError> {
        match &self.outcome {
            StageOutcome::Failed(e) => Some(e),
            StageOutcome::Exited(_) => None,
        }
    }
}

/// What happened to every stage of one pipeline run.
#[derive(Debug, Default)]
pub struct PipelineReport {
    stages: Vec<StageReport>,
    aborted: Option<ProcessError>,
}

impl PipelineReport {
    fn from_abort(err: ProcessError) -> Self {
        Self {
            stages: Vec::new(),
            aborted: Some(err),
        }
    }

    /// The pipeline-level failure that kept every stage from starting.
    pub fn aborted(&self) -> Option<&ProcessError> {
        self.aborted.as_ref()
    }

    pub fn stages(&self) -> &[StageReport] {
        &self.stages
    }

    pub fn stage(&self, position: usize) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.position == position)
    }

    /// Pipeline-level failure followed by per-stage failures in stage order.
    pub fn errors(&self) -> impl Iterator<Item = &ProcessError> {
        self.aborted
            .iter()
            .chain(self.stages.iter().filter_map(StageReport::error))
    }

    pub fn success(&self) -> bool {
        self.errors().next().is_none()
    }
}

/// A stage whose input and output ends are decided but not yet handed to a process.
struct StageNode<'p> {
    position: usize,
    last: bool,
    stage: &'p PipelineStage,
    input: Option<Stdio>,
    output: Option<Stdio>,
}

/// A stage after its start attempt. The parent holds no pipe ends for it.
struct StartedStage {
    position: usize,
    last: bool,
    program: String,
    child: Result<Child, ProcessError>,
}

impl<'p> StageNode<'p> {
    fn new(position: usize, last: bool, stage: &'p PipelineStage) -> Self {
        Self {
            position,
            last,
            stage,
            input: None,
            output: None,
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.stage.program);
        if self.stage.program == "ls" {
            command.arg(LS_COLOR_FLAG);
        }
        command.args(&self.stage.args);
        command
    }

    fn start(mut self, snapshot: &Snapshot) -> StartedStage {
        let mut command = self.command();
        command
            .env_clear()
            .envs(snapshot.iter())
            .stdin(self.input.take().unwrap_or_else(Stdio::inherit))
            .stdout(self.output.take().unwrap_or_else(Stdio::inherit))
            .stderr(Stdio::inherit());

        let spawned = command.spawn();
        // The child has its own copies of the pipe ends now; release ours so
        // readers downstream see end-of-stream once the writer exits.
        drop(command);

        let child = match spawned {
            Ok(child) => {
                log::debug!(
                    "stage {} started: {} (pid {})",
                    self.position,
                    self.stage.program,
                    child.id()
                );
                Ok(child)
            }
            Err(source) => Err(ProcessError::StartFailed {
                stage: self.position,
                program: self.stage.program.clone(),
                source,
            }),
        };

        StartedStage {
            position: self.position,
            last: self.last,
            program: self.stage.program.clone(),
            child,
        }
    }
}

/// A stage killed by SIGPIPE only lost its reader. That is how upstream
/// stages normally end when a downstream one stops reading early.
fn finished_normally(status: ExitStatus, last: bool) -> bool {
    status.success() || (!last && status.signal() == Some(libc::SIGPIPE))
}

impl StartedStage {
    fn reap(self) -> StageReport {
        let outcome = match self.child {
            Err(e) => StageOutcome::Failed(e),
            Ok(mut child) => match child.wait() {
                Ok(status) if finished_normally(status, self.last) => StageOutcome::Exited(status),
                Ok(status) => StageOutcome::Failed(ProcessError::ExitFailure {
                    stage: self.position,
                    program: self.program.clone(),
                    status,
                }),
                Err(source) => StageOutcome::Failed(ProcessError::WaitFailed {
                    stage: self.position,
                    program: self.program.clone(),
                    source,
                }),
            },
        };

        log::debug!("stage {} reaped: {:?}", self.position, outcome);
        StageReport {
            position: self.position,
            program: self.program,
            outcome,
        }
    }
}

/// Runs pipelines of external programs connected by OS pipes.
///
/// Every pipe is created and assigned to its two stages first. Stages are
/// then started left to right, and the parent drops its copies of a stage's
/// pipe ends as soon as that stage has been spawned. Only after all stages
/// have started is any of them waited for, so a producer never blocks on a
/// full pipe with no reader attached.
#[derive(Clone, Debug, Default)]
pub struct PipelineExecutor;

impl PipelineExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, pipeline: &Pipeline, snapshot: &Snapshot, io: PipelineIo) -> PipelineReport {
        self.execute_with(pipeline, snapshot, io, os_pipe::pipe)
    }

    fn execute_with<F>(
        &self,
        pipeline: &Pipeline,
        snapshot: &Snapshot,
        io: PipelineIo,
        make_pipe: F,
    ) -> PipelineReport
    where
        F: FnMut() -> io::Result<(PipeReader, PipeWriter)>,
    {
        let nodes = match Self::connect(pipeline, io, make_pipe) {
            Ok(nodes) => nodes,
            Err(e) => return PipelineReport::from_abort(e),
        };

        let started: Vec<StartedStage> = nodes
            .into_iter()
            .map(|node| node.start(snapshot))
            .collect();

        PipelineReport {
            stages: started.into_iter().map(StartedStage::reap).collect(),
            aborted: None,
        }
    }

    /// Creates one pipe per adjacent pair of stages. Nothing has been started
    /// yet, so a failure here only drops the pipes made so far.
    fn connect<F>(
        pipeline: &Pipeline,
        io: PipelineIo,
        mut make_pipe: F,
    ) -> Result<Vec<StageNode<'_>>, ProcessError>
    where
        F: FnMut() -> io::Result<(PipeReader, PipeWriter)>,
    {
        let count = pipeline.len();
        let mut nodes: Vec<StageNode<'_>> = pipeline
            .stages()
            .iter()
            .enumerate()
            .map(|(i, stage)| StageNode::new(i + 1, i + 1 == count, stage))
            .collect();

        for i in 1..nodes.len() {
            let (reader, writer) = make_pipe().map_err(ProcessError::PipeCreation)?;
            log::debug!("pipe connects stage {} -> stage {}", i, i + 1);
            nodes[i - 1].output = Some(writer.into());
            nodes[i].input = Some(reader.into());
        }

        if let Some(first) = nodes.first_mut() {
            first.input = Some(io.stdin.unwrap_or_else(Stdio::inherit));
        }
        if let Some(last) = nodes.last_mut() {
            last.output = Some(io.stdout.unwrap_or_else(Stdio::inherit));
        }

        Ok(nodes)
    }
}
