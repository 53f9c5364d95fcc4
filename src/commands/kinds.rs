//! `strongrandom kinds` command.

use std::io::Write;

use crate::generator::IdentifierKind;

/// Execute the `kinds` command: a table of every kind with its names and an example.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run(out: &mut dyn Write) -> Result<(), String> {
    let name_width = IdentifierKind::ALL.iter().map(|k| k.name().len()).max().unwrap_or(4).max(4);
    let cli_width =
        IdentifierKind::ALL.iter().map(|k| k.cli_name().len()).max().unwrap_or(8).max(8);

    let mut lines = vec![
        format!("{:<name_width$}  {:<cli_width$}  EXAMPLE", "KIND", "CLI NAME"),
        format!("{:-<name_width$}  {:-<cli_width$}  {:-<7}", "", "", ""),
    ];
    for kind in IdentifierKind::ALL {
        lines.push(format!(
            "{:<name_width$}  {:<cli_width$}  {}",
            kind.name(),
            kind.cli_name(),
            kind.example()
        ));
    }

    for line in lines {
        writeln!(out, "{line}").map_err(|e| format!("Failed to write output: {e}"))?;
    }
    Ok(())
}
