//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use serde_json::Value;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::GeneratorError;
use crate::generator::IdentifierKind;
use crate::ports::IdGenerator;

/// Replays recorded identifiers from a cassette, in the order they were generated.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a replaying ID generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    /// # Panics
    ///
    /// Panics if the next recording was made for a different kind or is malformed.
    fn generate(&self, kind: IdentifierKind) -> Result<String, GeneratorError> {
        let interaction = self
            .replayer
            .lock()
            .expect("replayer lock poisoned")
            .next_interaction("id_gen", "generate");

        let recorded = interaction.input.get("kind").and_then(Value::as_str);
        assert!(
            recorded == Some(kind.name()),
            "id_gen replay mismatch at seq {}: requested {kind}, recorded {recorded:?}",
            interaction.seq
        );

        let output = &interaction.output;
        if let Some(value) = output.get("Ok").and_then(Value::as_str) {
            return Ok(value.to_string());
        }
        match output.get("Err").and_then(Value::as_str) {
            Some(message) => Err(GeneratorError::RandomSourceUnavailable(message.to_string())),
            None => panic!("malformed id_gen recording at seq {}: {output}", interaction.seq),
        }
    }
}
