//! Identifier kinds and selector parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// The shape of identifier to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    /// Ten characters from `[0-9a-zA-Z]` with a digit, a lowercase and an uppercase letter.
    AlphanumericFixed10,
    /// Canonical lowercase GUID, e.g. `3fa85f64-5717-4562-b3fc-2c963f66afa6`.
    StandardGuid,
    /// Canonical GUID with uppercase hex letters.
    UppercaseGuid,
    /// `0x` followed by eight lowercase hex digits with a digit and a letter.
    HexToken8,
}

impl IdentifierKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] =
        [Self::AlphanumericFixed10, Self::StandardGuid, Self::UppercaseGuid, Self::HexToken8];

    /// The member name, as used by command selectors.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AlphanumericFixed10 => "AlphanumericFixed10",
            Self::StandardGuid => "StandardGuid",
            Self::UppercaseGuid => "UppercaseGuid",
            Self::HexToken8 => "HexToken8",
        }
    }

    /// The kebab-case name accepted on the command line.
    #[must_use]
    pub fn cli_name(self) -> &'static str {
        match self {
            Self::AlphanumericFixed10 => "alphanumeric-fixed10",
            Self::StandardGuid => "standard-guid",
            Self::UppercaseGuid => "uppercase-guid",
            Self::HexToken8 => "hex-token8",
        }
    }

    /// A representative value showing the output shape.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::AlphanumericFixed10 => "aB3kZ9mQ1x",
            Self::StandardGuid => "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            Self::UppercaseGuid => "3FA85F64-5717-4562-B3FC-2C963F66AFA6",
            Self::HexToken8 => "0x1a2b3c4d",
        }
    }

    // Selectors from the desktop app's command parameters.
    fn legacy(selector: &str) -> Option<Self> {
        match selector {
            "String10" => Some(Self::AlphanumericFixed10),
            "Guid" => Some(Self::StandardGuid),
            "Hex8" => Some(Self::HexToken8),
            _ => None,
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdentifierKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        if let Some(kind) = Self::legacy(selector) {
            return Ok(kind);
        }
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(selector)
                    || kind.cli_name().eq_ignore_ascii_case(selector)
            })
            .ok_or_else(|| GeneratorError::InvalidKind(s.to_string()))
    }
}
