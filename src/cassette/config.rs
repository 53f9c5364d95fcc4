//! Per-port cassette configuration for composable replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports left as `None` are not replayed.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the ID generator port cassette file.
    pub id_gen: Option<PathBuf>,
    /// Path to the clock port cassette file.
    pub clock: Option<PathBuf>,
    /// Path to the shell port cassette file.
    pub shell: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
#[derive(Debug, Default)]
pub struct PortReplayers {
    /// Replayer for the ID generator port.
    pub id_gen: Option<CassetteReplayer>,
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the shell port.
    pub shell: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Config for a directory written by a recording session.
    ///
    /// Expects `<port>.cassette.yaml` files; missing files leave the port unset.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let existing = |port: &str| {
            let path = dir.join(format!("{port}.cassette.yaml"));
            path.exists().then_some(path)
        };
        Self { id_gen: existing("id_gen"), clock: existing("clock"), shell: existing("shell") }
    }

    /// Load one cassette file into a replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<CassetteReplayer, String> {
        Cassette::load(path).map(|cassette| CassetteReplayer::new(&cassette))
    }

    /// Load every configured cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            id_gen: self.id_gen.as_deref().map(Self::load).transpose()?,
            clock: self.clock.as_deref().map(Self::load).transpose()?,
            shell: self.shell.as_deref().map(Self::load).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    #[test]
    fn from_dir_picks_up_only_existing_files() {
        let dir = std::env::temp_dir().join("strongrandom_config_from_dir");
        std::fs::create_dir_all(&dir).unwrap();
        let mut recorder = CassetteRecorder::new(dir.join("id_gen.cassette.yaml"), "ids");
        recorder.record("id_gen", "generate", json!({"kind": "HexToken8"}), json!({"Ok": "0x1"}));
        recorder.finish().unwrap();

        let config = CassetteConfig::from_dir(&dir);
        assert!(config.id_gen.is_some());
        assert!(config.clock.is_none());
        assert!(config.shell.is_none());

        let mut replayers = config.load_all().unwrap();
        let ids = replayers.id_gen.as_mut().unwrap();
        assert_eq!(ids.next_interaction("id_gen", "generate").output, json!({"Ok": "0x1"}));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_all_with_nothing_configured() {
        let replayers = CassetteConfig::default().load_all().unwrap();
        assert!(replayers.id_gen.is_none());
        assert!(replayers.clock.is_none());
        assert!(replayers.shell.is_none());
    }

    #[test]
    fn load_all_propagates_parse_errors() {
        let dir = std::env::temp_dir().join("strongrandom_config_bad_yaml");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("clock.cassette.yaml");
        std::fs::write(&path, "not: [a cassette").unwrap();

        let config = CassetteConfig { clock: Some(path), ..CassetteConfig::default() };
        let err = config.load_all().unwrap_err();
        assert!(err.contains("Failed to parse cassette file"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
