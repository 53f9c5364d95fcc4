//! Command dispatch and handlers.

pub mod generate;
pub mod kinds;

use std::io::Write;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler, writing results to stdout.
///
/// When [`Settings::record_dir`] is set, port interactions are recorded to
/// per-port cassette files in that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, settings: &Settings) -> Result<(), String> {
    let (ctx, session) = match &settings.record_dir {
        Some(dir) => {
            let (ctx, session) = ServiceContext::recording_at(dir.clone())?;
            (ctx, Some(session))
        }
        None => (ServiceContext::live(), None),
    };

    let stdout = std::io::stdout();
    let result = dispatch_with_context(command, settings, &ctx, &mut stdout.lock());

    // Recording adapters hold the recorders until the context is dropped.
    if let Some(session) = session {
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context and output sink.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    settings: &Settings,
    ctx: &ServiceContext,
    out: &mut dyn Write,
) -> Result<(), String> {
    match command {
        Command::Generate { kind, count, copy, no_copy, json } => {
            let opts = generate::GenerateOptions {
                kind,
                count: *count,
                copy: (*copy || settings.copy_to_clipboard) && !*no_copy,
                json: *json,
                clipboard_command: settings.clipboard_command.as_deref(),
            };
            generate::run(ctx, &opts, out)
        }
        Command::Kinds => kinds::run(out),
    }
}

fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    tracing::info!(dir = %output_dir.display(), "recording saved");
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(kind: &str) -> Command {
        Command::Generate { kind: kind.into(), count: 2, copy: false, no_copy: false, json: false }
    }

    #[test]
    fn dispatches_generate() {
        let mut out = Vec::new();
        let result = dispatch_with_context(
            &generate("uppercase-guid"),
            &Settings::default(),
            &ServiceContext::live(),
            &mut out,
        );
        assert!(result.is_ok());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.len() == 36 && !l.bytes().any(|b| b.is_ascii_lowercase())));
    }

    #[test]
    fn dispatch_records_into_configured_directory() {
        let dir = std::env::temp_dir().join("strongrandom_dispatch_record");
        let _ = std::fs::remove_dir_all(&dir);
        let settings = Settings { record_dir: Some(dir.clone()), ..Settings::default() };

        assert!(dispatch(&generate("Hex8"), &settings).is_ok());

        let cassette =
            crate::cassette::format::Cassette::load(&dir.join("id_gen.cassette.yaml")).unwrap();
        assert_eq!(cassette.interactions.len(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
