//! Copying text to the system clipboard through a shell command.

use crate::ports::ShellExecutor;

/// The platform's clipboard command, given whether a Wayland session is active.
#[must_use]
pub fn command_for(os: &str, wayland: bool) -> &'static str {
    match os {
        "windows" => "clip",
        "macos" => "pbcopy",
        _ if wayland => "wl-copy",
        _ => "xclip -selection clipboard",
    }
}

/// The clipboard command for the running platform.
#[must_use]
pub fn default_command() -> &'static str {
    command_for(std::env::consts::OS, std::env::var_os("WAYLAND_DISPLAY").is_some())
}

/// Sends `text` to the clipboard by piping it into `command`.
///
/// # Errors
///
/// Returns an error if the command cannot be run or exits unsuccessfully.
pub fn copy(shell: &dyn ShellExecutor, command: &str, text: &str) -> Result<(), String> {
    let output = shell
        .run(command, Some(text))
        .map_err(|e| format!("clipboard command `{command}` failed to run: {e}"))?;
    if !output.success() {
        return Err(format!(
            "clipboard command `{command}` exited with status {}: {}",
            output.exit_code,
            output.stderr.trim()
        ));
    }
    tracing::debug!(command, bytes = text.len(), "copied to clipboard");
    Ok(())
}
