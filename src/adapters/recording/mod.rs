//! Recording adapters that capture port interactions into cassettes.

pub mod clock;
pub mod id_gen;
pub mod shell;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use clock::RecordingClock;
pub use id_gen::RecordingIdGenerator;
pub use shell::RecordingShellExecutor;

/// Record an interaction with a plain (non-`Result`) return value.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    match (serde_json::to_value(input), serde_json::to_value(output)) {
        (Ok(input), Ok(output)) => push(recorder, port, method, input, output),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(port, method, error = %e, "interaction not recorded");
        }
    }
}

/// Record a `Result` interaction as `{"Ok": value}` or `{"Err": message}`.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(value) => serde_json::to_value(value).map(|v| serde_json::json!({ "Ok": v })),
        Err(e) => Ok(serde_json::json!({ "Err": e.to_string() })),
    };
    match (serde_json::to_value(input), output) {
        (Ok(input), Ok(output)) => push(recorder, port, method, input, output),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(port, method, error = %e, "interaction not recorded");
        }
    }
}

fn push(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: serde_json::Value,
    output: serde_json::Value,
) {
    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input, output),
        Err(_) => tracing::warn!(port, method, "recorder lock poisoned; interaction dropped"),
    }
}
