//! Replaying adapters that serve recorded interactions back.

pub mod clock;
pub mod id_gen;
pub mod shell;

pub use clock::ReplayingClock;
pub use id_gen::ReplayingIdGenerator;
pub use shell::ReplayingShellExecutor;

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;

/// Pop the next recorded output for `port::method`.
///
/// # Panics
///
/// Panics if the cassette is exhausted for the pair or the replayer lock is poisoned.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}
