//! Shell executor port for running external commands.

/// The output of a shell command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    /// The exit code of the process.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Returns true when the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes shell commands.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command string in the system shell, writing `stdin` to it when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or its input cannot be written.
    fn run(
        &self,
        command: &str,
        stdin: Option<&str>,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>>;
}
