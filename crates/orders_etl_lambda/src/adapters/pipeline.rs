use std::process::Command;

use orders_etl_core::job::PipelineJob;

/// The ETL pipeline the trigger hands its job to. The transformation itself
/// lives outside this workspace.
pub trait EtlPipeline {
    fn run(&self, job: &PipelineJob) -> Result<(), String>;
}

/// Runs the pipeline as an external program. Leading arguments come first,
/// then the job values in `PipelineJob::args` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPipeline {
    program: String,
    leading_args: Vec<String>,
}

const STDERR_TAIL_CHARS: usize = 2_048;

impl CommandPipeline {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Splits a configured command line on whitespace, e.g.
    /// `"python3 -m orders_etl"`. Returns `None` for a blank line.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program).with_leading_args(parts))
    }

    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl EtlPipeline for CommandPipeline {
    fn run(&self, job: &PipelineJob) -> Result<(), String> {
        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .args(job.args())
            .output()
            .map_err(|error| format!("failed to start pipeline '{}': {error}", self.program))?;

        if output.status.success() {
            return Ok(());
        }

        let status = match output.status.code() {
            Some(code) => format!("exit code {code}"),
            None => "termination by signal".to_string(),
        };
        let stderr = String::from_utf8_lossy(&output.stderr);
        let tail = stderr_tail(stderr.trim());
        if tail.is_empty() {
            Err(format!("pipeline '{}' failed with {status}", self.program))
        } else {
            Err(format!(
                "pipeline '{}' failed with {status}: {tail}",
                self.program
            ))
        }
    }
}

fn stderr_tail(stderr: &str) -> &str {
    match stderr.char_indices().rev().nth(STDERR_TAIL_CHARS - 1) {
        Some((index, _)) => &stderr[index..],
        None => stderr,
    }
}
