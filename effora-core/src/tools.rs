use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::types::EfforaError;

/// Interval between child status polls when a time limit is configured.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Adapter for driving one external tool as a blocking child process.
///
/// Both external call sites of the pipeline, the statistics tool and the
/// classifier, go through this one abstraction: spawn with the given
/// arguments, optionally redirect stdout to a file, block until exit, and
/// turn every failure into an error naming the tool. There is no retry
/// logic; a failed invocation terminates the run.
#[derive(Debug)]
pub struct ExternalTool {
    name: &'static str,
    program: PathBuf,
}

impl ExternalTool {
    /// Create an adapter for `program`, reported as `name` in diagnostics.
    pub fn new(name: &'static str, program: impl Into<PathBuf>) -> Self {
        Self {
            name,
            program: program.into(),
        }
    }

    /// Tool name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the tool to completion.
    ///
    /// When `stdout_to` is given the child's stdout is redirected into that
    /// file, which is how the classifier's prediction stream is captured.
    /// With `timeout` of `None` the wait is unbounded; otherwise the child is
    /// polled and killed once the limit passes.
    ///
    /// # Errors
    ///
    /// - [`EfforaError::ToolLaunch`] when the process cannot be started
    /// - [`EfforaError::ToolFailed`] on a non-zero exit status
    /// - [`EfforaError::ToolTimeout`] when a configured limit is exceeded
    pub fn run<I, S>(
        &self,
        args: I,
        stdout_to: Option<&Path>,
        timeout: Option<Duration>,
    ) -> Result<(), EfforaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command.args(args).stdin(Stdio::null());
        if let Some(path) = stdout_to {
            command.stdout(File::create(path)?);
        }

        let mut child = command.spawn().map_err(|source| EfforaError::ToolLaunch {
            tool: self.name,
            source,
        })?;

        let status = match timeout {
            None => child.wait()?,
            Some(limit) => {
                let started = Instant::now();
                loop {
                    if let Some(status) = child.try_wait()? {
                        break status;
                    }
                    if started.elapsed() >= limit {
                        child.kill()?;
                        child.wait()?;
                        return Err(EfforaError::ToolTimeout {
                            tool: self.name,
                            limit,
                        });
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
            }
        };

        if !status.success() {
            return Err(EfforaError::ToolFailed {
                tool: self.name,
                status,
            });
        }
        Ok(())
    }
}
