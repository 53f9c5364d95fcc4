//! `strongrandom generate` command.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clipboard;
use crate::context::ServiceContext;
use crate::generator::IdentifierKind;

/// Options for one `generate` invocation, after settings and flags are merged.
#[derive(Debug, Clone)]
pub struct GenerateOptions<'a> {
    /// Kind selector as typed by the user.
    pub kind: &'a str,
    /// Number of identifiers to produce.
    pub count: u32,
    /// Whether to copy the output to the clipboard.
    pub copy: bool,
    /// Emit JSON records instead of bare values.
    pub json: bool,
    /// Clipboard command; the platform default when `None`.
    pub clipboard_command: Option<&'a str>,
}

/// JSON form of one generated identifier.
#[derive(Debug, Serialize)]
pub struct GeneratedRecord<'a> {
    /// Kind that was requested.
    pub kind: IdentifierKind,
    /// The generated identifier.
    pub value: &'a str,
    /// When the identifier was generated.
    pub generated_at: DateTime<Utc>,
}

/// Execute the `generate` command, writing results to `out`.
///
/// Clipboard failures are logged and do not fail the command.
///
/// # Errors
///
/// Returns an error string if the kind is unknown, generation fails or
/// output cannot be written.
pub fn run(
    ctx: &ServiceContext,
    opts: &GenerateOptions<'_>,
    out: &mut dyn Write,
) -> Result<(), String> {
    let kind = opts.kind.parse::<IdentifierKind>().map_err(|e| e.to_string())?;

    let mut values = Vec::with_capacity(usize::try_from(opts.count).unwrap_or_default());
    for _ in 0..opts.count {
        let value = ctx.id_gen.generate(kind).map_err(|e| e.to_string())?;
        let written = if opts.json {
            let record = GeneratedRecord { kind, value: &value, generated_at: ctx.clock.now() };
            let line = serde_json::to_string(&record)
                .map_err(|e| format!("Failed to serialize record: {e}"))?;
            writeln!(out, "{line}")
        } else {
            writeln!(out, "{value}")
        };
        written.map_err(|e| format!("Failed to write output: {e}"))?;
        values.push(value);
    }
    tracing::info!(%kind, count = opts.count, "generated identifiers");

    if opts.copy {
        let command = opts.clipboard_command.unwrap_or_else(|| clipboard::default_command());
        if let Err(e) = clipboard::copy(ctx.shell.as_ref(), command, &values.join("\n")) {
            tracing::warn!("{e}");
        }
    }
    Ok(())
}
