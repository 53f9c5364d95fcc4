//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI parser for `strongrandom`.
#[derive(Debug, Parser)]
#[command(name = "strongrandom", version, about = "Generate strong random identifiers")]
pub struct Cli {
    /// Raise log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate identifiers of the given kind.
    Generate {
        /// Identifier kind, e.g. `alphanumeric-fixed10`, `StandardGuid` or `Hex8`.
        kind: String,
        /// Number of identifiers to generate.
        #[arg(
            short = 'n',
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        count: u32,
        /// Copy the output to the clipboard.
        #[arg(long, conflicts_with = "no_copy")]
        copy: bool,
        /// Do not copy the output, even if `STRONGRANDOM_COPY` is set.
        #[arg(long)]
        no_copy: bool,
        /// Print one JSON object per identifier.
        #[arg(long)]
        json: bool,
    },
    /// List the identifier kinds.
    Kinds,
}
