//! Run the external query engine as a subprocess.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info_span, Instrument};

use gaiafov_configuration::EngineSettings;

use crate::error::InvocationError;

/// Captured result of one engine run.
///
/// A non-zero status is not an error at this layer; the caller classifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or `None` if the process was terminated by a signal.
    pub status: Option<i32>,
}

impl EngineOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// The narrow seam to the external engine.
///
/// Everything above this trait — validation, marshalling, decoding — can be
/// exercised against a test double.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    async fn invoke(&self, params: &[String]) -> Result<EngineOutput, InvocationError>;
}

/// Invokes the engine executable as a child process, synchronously from the
/// caller's point of view: the future resolves only once the process has
/// exited and its output is fully read.
#[derive(Debug, Clone)]
pub struct SubprocessEngine {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl SubprocessEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        SubprocessEngine {
            program: program.into(),
            timeout: None,
        }
    }

    /// Kill the child and surface [`InvocationError::TimedOut`] if it runs
    /// longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl From<&EngineSettings> for SubprocessEngine {
    fn from(settings: &EngineSettings) -> Self {
        let engine = SubprocessEngine::new(settings.engine_program.clone());
        match settings.timeout_secs {
            Some(secs) => engine.with_timeout(Duration::from_secs(secs)),
            None => engine,
        }
    }
}

#[async_trait]
impl QueryEngine for SubprocessEngine {
    async fn invoke(&self, params: &[String]) -> Result<EngineOutput, InvocationError> {
        async {
            let child = Command::new(&self.program)
                .args(params)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                // If the timeout drops the wait future, the child must not
                // linger.
                .kill_on_drop(true)
                .spawn()
                .map_err(|error| InvocationError::Spawn {
                    program: self.program.clone(),
                    error,
                })?;

            let wait = child.wait_with_output();
            let output = match self.timeout {
                Some(limit) => tokio::time::timeout(limit, wait)
                    .await
                    .map_err(|_| InvocationError::TimedOut { after: limit })?,
                None => wait.await,
            }
            .map_err(|error| InvocationError::Wait { error })?;

            let engine_output = EngineOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                status: output.status.code(),
            };

            tracing::debug!(
                status = ?engine_output.status,
                stdout_bytes = engine_output.stdout.len(),
                "query engine exited"
            );

            Ok(engine_output)
        }
        .instrument(info_span!(
            "Invoke query engine",
            program = %self.program.display()
        ))
        .await
    }
}
