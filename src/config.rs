//! Runtime settings read from the environment.
//!
//! `main` loads a `.env` file (via `dotenvy`) before these are read, so the
//! same variables may be set there.

use std::path::PathBuf;

use tracing::Level;

/// Copy generated identifiers to the clipboard by default.
pub const ENV_COPY: &str = "STRONGRANDOM_COPY";
/// Clipboard command overriding the platform default.
pub const ENV_CLIPBOARD_CMD: &str = "STRONGRANDOM_CLIPBOARD_CMD";
/// Directory to record port cassettes into.
pub const ENV_RECORD: &str = "STRONGRANDOM_RECORD";
/// Log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const ENV_LOG: &str = "STRONGRANDOM_LOG";

/// Settings resolved from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether `generate` copies its output unless told otherwise.
    pub copy_to_clipboard: bool,
    /// Explicit clipboard command, if configured.
    pub clipboard_command: Option<String>,
    /// Cassette directory when recording is enabled.
    pub record_dir: Option<PathBuf>,
    /// Base log level before `-v` flags are applied.
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            copy_to_clipboard: false,
            clipboard_command: None,
            record_dir: None,
            log_level: Level::WARN,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset or
    /// unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty =
            |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            copy_to_clipboard: non_empty(ENV_COPY)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.copy_to_clipboard),
            clipboard_command: non_empty(ENV_CLIPBOARD_CMD),
            record_dir: non_empty(ENV_RECORD).map(PathBuf::from),
            log_level: non_empty(ENV_LOG)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// The log level after raising the base level by `verbosity` steps.
    #[must_use]
    pub fn effective_log_level(&self, verbosity: u8) -> Level {
        const LEVELS: [Level; 5] =
            [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE];
        let base = LEVELS.iter().position(|l| *l == self.log_level).unwrap_or(1);
        LEVELS[(base + usize::from(verbosity)).min(LEVELS.len() - 1)]
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
