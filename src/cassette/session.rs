//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::recorder::CassetteRecorder;

/// Port names recorded by a session, in the order their cassettes are written.
pub const RECORDED_PORTS: [&str; 3] = ["id_gen", "clock", "shell"];

/// Owns one [`CassetteRecorder`] per port, each writing `<port>.cassette.yaml`
/// into the session directory.
pub struct RecordingSession {
    /// Recorder for ID generator interactions.
    pub id_gen: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for shell interactions.
    pub shell: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Start a session writing into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` already holds files or cannot be created.
    pub fn at(dir: impl Into<PathBuf>) -> Result<Self, String> {
        let output_dir = dir.into();
        if is_non_empty_dir(&output_dir) {
            return Err(format!(
                "Cassette directory already holds recordings: {}",
                output_dir.display()
            ));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let session_name = output_dir
            .file_name()
            .map_or_else(|| "session".to_string(), |n| n.to_string_lossy().into_owned());
        let make_recorder = |port: &str| {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{session_name}-{port}"))))
        };

        tracing::warn!(
            dir = %output_dir.display(),
            "recording session started; generated identifiers are written in plaintext"
        );
        Ok(Self {
            id_gen: make_recorder("id_gen"),
            clock: make_recorder("clock"),
            shell: make_recorder("shell"),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write every port's cassette and return the session directory.
    ///
    /// All recording adapters must be dropped first. A failing port does not
    /// stop the others from being written.
    ///
    /// # Errors
    ///
    /// Returns every port's error, one per line, if an adapter still holds a
    /// recorder or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(recorder: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(recorder)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        let recorders = [(self.id_gen, "id_gen"), (self.clock, "clock"), (self.shell, "shell")];
        let errors: Vec<String> = recorders
            .into_iter()
            .filter_map(|(recorder, port)| finish_one(recorder, port).err())
            .collect();
        if errors.is_empty() {
            Ok(self.output_dir)
        } else {
            Err(errors.join("\n"))
        }
    }
}

fn is_non_empty_dir(path: &Path) -> bool {
    std::fs::read_dir(path).is_ok_and(|mut entries| entries.next().is_some())
}
