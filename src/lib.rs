//! Strong random identifier generation.
//!
//! The [`generator`] module is the reusable core: it turns a secure entropy
//! source into identifiers that satisfy per-kind format and character-class
//! rules. The rest of the crate wraps it in the `strongrandom` CLI.
//!
//! ```
//! use strongrandom::{generate, IdentifierKind};
//!
//! let token = generate(IdentifierKind::HexToken8).unwrap();
//! assert!(token.starts_with("0x"));
//! assert_eq!(token.len(), 10);
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod ports;

pub use error::GeneratorError;
pub use generator::{generate, Generator, IdentifierKind};

use clap::error::ErrorKind;
use clap::Parser;
use config::Settings;
use tracing::Level;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// `--help` and `--version` print to stdout and succeed.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(|e| format!("Failed to write help: {e}"));
        }
        Err(err) => return Err(err.to_string()),
    };
    let settings = Settings::from_env();
    init_logging(settings.effective_log_level(cli.verbose));
    commands::dispatch(&cli.command, &settings)
}

/// Install the stderr `fmt` subscriber; later calls are no-ops.
fn init_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
