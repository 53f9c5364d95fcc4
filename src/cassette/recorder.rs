//! Records interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Accumulates interactions and writes them out as a YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Create a recorder that will write to `path` on [`finish`](Self::finish).
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), interactions: Vec::new() }
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Record an interaction. Its `seq` is its position in the cassette.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// Write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_and_finish() {
        let dir = std::env::temp_dir().join("strongrandom_recorder_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "session");
        assert!(recorder.is_empty());
        recorder.record(
            "id_gen",
            "generate",
            json!({"kind": "StandardGuid"}),
            json!({"Ok": "3fa85f64-5717-4562-b3fc-2c963f66afa6"}),
        );
        recorder.record("clock", "now", json!({}), json!("2025-03-15T14:30:00Z"));
        assert_eq!(recorder.len(), 2);

        let written = recorder.finish().unwrap();
        assert_eq!(written, path);

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.name, "session");
        assert_eq!(cassette.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[1].seq, 1);
        assert_eq!(cassette.interactions[1].port, "clock");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
