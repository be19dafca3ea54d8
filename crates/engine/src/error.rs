//! Errors for engine invocation and response decoding.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// The engine process could not be run to a usable completion.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("could not start query engine '{program}': {error}")]
    Spawn {
        program: PathBuf,
        error: std::io::Error,
    },
    #[error("query engine did not run to completion: {error}")]
    Wait { error: std::io::Error },
    #[error("query engine exceeded the {}s timeout and was killed", after.as_secs_f64())]
    TimedOut { after: Duration },
    /// The engine ran but exited non-zero. Captured output is kept for
    /// diagnostics; its stdout is not guaranteed to be valid JSON.
    #[error("query engine exited with status {status:?}: {stderr}")]
    EngineFailure {
        status: Option<i32>,
        stderr: String,
        stdout: String,
    },
}

/// The engine's output is not parseable into the expected star array.
#[derive(Debug, Error)]
#[error("engine output is not a valid star array: {error}; output begins: {snippet:?}")]
pub struct DecodeError {
    pub error: serde_json::Error,
    /// Leading portion of the raw output, for diagnosis.
    pub snippet: String,
}
