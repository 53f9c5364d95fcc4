//! Recording adapter for the `IdGenerator` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::GeneratorError;
use crate::generator::IdentifierKind;
use crate::ports::IdGenerator;

/// Records generated identifiers while delegating to an inner generator.
pub struct RecordingIdGenerator {
    inner: Box<dyn IdGenerator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingIdGenerator {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn IdGenerator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct GenerateInput {
    kind: IdentifierKind,
}

impl IdGenerator for RecordingIdGenerator {
    fn generate(&self, kind: IdentifierKind) -> Result<String, GeneratorError> {
        let result = self.inner.generate(kind);
        record_result(&self.recorder, "id_gen", "generate", &GenerateInput { kind }, &result);
        result
    }
}
