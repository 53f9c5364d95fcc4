//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number within the cassette, assigned by the recorder.
    pub seq: u64,
    /// Port name (`id_gen`, `clock`, `shell`).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Input passed to the port.
    pub input: serde_json::Value,
    /// Output returned by the port.
    pub output: serde_json::Value,
}

/// A named, ordered list of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was written.
    pub recorded_at: DateTime<Utc>,
    /// Version of `strongrandom` that wrote the cassette.
    pub version: String,
    /// Interactions in recording order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads and parses a cassette YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_reports_missing_file() {
        let err = Cassette::load(std::path::Path::new("/nonexistent/x.cassette.yaml")).unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }

    #[test]
    fn load_parses_written_yaml() {
        let dir = std::env::temp_dir().join("strongrandom_format_load_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("id_gen.cassette.yaml");
        let cassette = Cassette {
            name: "load".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "id_gen".into(),
                method: "generate".into(),
                input: json!({"kind": "HexToken8"}),
                output: json!({"Ok": "0x1a2b3c4d"}),
            }],
        };
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        assert_eq!(Cassette::load(&path).unwrap(), cassette);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
