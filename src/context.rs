//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};

use crate::adapters::live::{LiveClock, LiveShellExecutor};
use crate::adapters::recording::{RecordingClock, RecordingIdGenerator, RecordingShellExecutor};
use crate::adapters::replaying::{ReplayingClock, ReplayingIdGenerator, ReplayingShellExecutor};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::error::GeneratorError;
use crate::generator::{Generator, IdentifierKind};
use crate::ports::{Clock, IdGenerator, ShellExecutor, ShellOutput};

/// Bundles one adapter per port.
///
/// Constructors wire up live, recording or replaying implementations.
pub struct ServiceContext {
    /// Identifier generator.
    pub id_gen: Box<dyn IdGenerator>,
    /// Clock for timestamps.
    pub clock: Box<dyn Clock>,
    /// Shell executor for the clipboard command.
    pub shell: Box<dyn ShellExecutor>,
}

impl ServiceContext {
    /// Creates a context backed by the OS random source, system clock and shell.
    #[must_use]
    pub fn live() -> Self {
        Self {
            id_gen: Box::new(Generator::os()),
            clock: Box::new(LiveClock),
            shell: Box::new(LiveShellExecutor),
        }
    }

    /// Creates a live context whose port calls are recorded into `session`.
    #[must_use]
    pub fn recording(session: &RecordingSession) -> Self {
        use std::sync::Arc;

        Self {
            id_gen: Box::new(RecordingIdGenerator::new(
                Box::new(Generator::os()),
                Arc::clone(&session.id_gen),
            )),
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&session.clock))),
            shell: Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                Arc::clone(&session.shell),
            )),
        }
    }

    /// Starts a recording session in `dir` and returns a context recording into it.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be prepared.
    pub fn recording_at(dir: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::at(dir)?;
        Ok((Self::recording(&session), session))
    }

    /// Creates a replaying context from a single cassette holding every port.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        // Each port gets its own replayer so cursors stay independent.
        Ok(Self {
            id_gen: Box::new(ReplayingIdGenerator::new(CassetteReplayer::new(&cassette))),
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette panic with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        Ok(Self {
            id_gen: match replayers.id_gen {
                Some(r) => Box::new(ReplayingIdGenerator::new(r)),
                None => Box::new(UnconfiguredIdGenerator),
            },
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(UnconfiguredClock),
            },
            shell: match replayers.shell {
                Some(r) => Box::new(ReplayingShellExecutor::new(r)),
                None => Box::new(UnconfiguredShellExecutor),
            },
        })
    }
}

// --- Adapters for ports left out of a CassetteConfig ---

struct UnconfiguredIdGenerator;
impl IdGenerator for UnconfiguredIdGenerator {
    fn generate(&self, _kind: IdentifierKind) -> Result<String, GeneratorError> {
        panic!("IdGenerator port not configured in CassetteConfig (no id_gen cassette loaded)");
    }
}

struct UnconfiguredClock;
impl Clock for UnconfiguredClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in CassetteConfig (no clock cassette loaded)");
    }
}

struct UnconfiguredShellExecutor;
impl ShellExecutor for UnconfiguredShellExecutor {
    fn run(
        &self,
        _command: &str,
        _stdin: Option<&str>,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        panic!("ShellExecutor port not configured in CassetteConfig (no shell cassette loaded)");
    }
}
