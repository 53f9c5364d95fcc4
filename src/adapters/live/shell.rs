//! Live shell executor using `std::process::Command`.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Live shell executor that runs commands via the system shell.
pub struct LiveShellExecutor;

fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

impl ShellExecutor for LiveShellExecutor {
    fn run(
        &self,
        command: &str,
        stdin: Option<&str>,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let mut child = shell_command(command)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
            // A command may exit without reading its input.
            if let Err(e) = pipe.write_all(input.as_bytes()) {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        tracing::debug!(command, status = ?output.status, "shell command finished");
        Ok(ShellOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
