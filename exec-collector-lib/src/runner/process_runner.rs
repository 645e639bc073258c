use super::CommandRunner;
use crate::error::CollectError;
use futures::future::BoxFuture;
use std::process::Stdio;
use tokio::process::Command;

const LOG_TARGET: &str = "    runner";

/// Runs metrics as child processes of the current process.
///
/// Children are never killed by the runner; a slow program is waited for
/// until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run<'a>(&'a self, executable: &'a str, args: &'a [String]) -> BoxFuture<'a, Result<Vec<u8>, CollectError>> {
        Box::pin(run_process(executable, args))
    }
}

async fn run_process(executable: &str, args: &[String]) -> Result<Vec<u8>, CollectError> {
    log::trace!(target: LOG_TARGET, "Running '{executable}' with arguments {args:?}");

    let output = Command::new(executable)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| CollectError::Execution {
            executable: executable.to_string(),
            reason: e.to_string(),
            partial_stdout: Vec::new(),
        })?;

    if !output.stderr.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::debug!(target: LOG_TARGET, "'{executable}' wrote to stderr: {}", stderr.trim_end());
    }

    if !output.status.success() {
        return Err(CollectError::Execution {
            executable: executable.to_string(),
            reason: output.status.to_string(),
            partial_stdout: output.stdout,
        });
    }

    Ok(output.stdout)
}
