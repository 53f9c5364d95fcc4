//! Replaying adapter for the `ShellExecutor` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Replays recorded shell command results from a cassette.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(
        &self,
        _command: &str,
        _stdin: Option<&str>,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "shell", "run");
        if let Some(err) = output.get("Err") {
            return Err(err.as_str().unwrap_or("unknown error").into());
        }
        let value = output.get("Ok").unwrap_or(&output);
        let text = |field: &str| {
            value.get(field).and_then(serde_json::Value::as_str).unwrap_or("").to_string()
        };
        let exit_code = value.get("exit_code").and_then(serde_json::Value::as_i64).unwrap_or(0);
        Ok(ShellOutput {
            exit_code: i32::try_from(exit_code).unwrap_or(1),
            stdout: text("stdout"),
            stderr: text("stderr"),
        })
    }
}
