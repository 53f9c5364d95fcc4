//! Recording adapter for the `ShellExecutor` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{ShellExecutor, ShellOutput};

/// Records shell commands and their results while delegating to an inner executor.
///
/// Only the command line is recorded; stdin carries generated values and is left out.
pub struct RecordingShellExecutor {
    inner: Box<dyn ShellExecutor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingShellExecutor {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn ShellExecutor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct CommandInput<'a> {
    command: &'a str,
}

#[derive(Serialize)]
struct RecordedOutput<'a> {
    exit_code: i32,
    stdout: &'a str,
    stderr: &'a str,
}

impl ShellExecutor for RecordingShellExecutor {
    fn run(
        &self,
        command: &str,
        stdin: Option<&str>,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.run(command, stdin);
        let recorded = result.as_ref().map(|out| RecordedOutput {
            exit_code: out.exit_code,
            stdout: &out.stdout,
            stderr: &out.stderr,
        });
        record_result(&self.recorder, "shell", "run", &CommandInput { command }, &recorded);
        result
    }
}
