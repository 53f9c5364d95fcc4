//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Serves a cassette's interactions back in order, one queue per port/method pair.
#[derive(Debug, Default)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a replayer over a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Interactions not yet served, across all ports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Take the next interaction recorded for `port` and `method`.
    ///
    /// # Panics
    ///
    /// Panics if the cassette holds no further interaction for the pair,
    /// listing the pairs that do remain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        if let Some(interaction) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) {
            return interaction;
        }

        let mut pending: Vec<String> = self
            .queues
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|((p, m), queue)| format!("{p}::{m} ({})", queue.len()))
            .collect();
        pending.sort();
        panic!(
            "Cassette exhausted: no interaction left for port={port:?} method={method:?}. \
             Remaining: [{}]",
            pending.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        }
    }

    #[test]
    fn serves_each_port_in_recorded_order() {
        let cassette = make_cassette(vec![
            interaction(0, "id_gen", "generate", json!({"Ok": "first"})),
            interaction(1, "clock", "now", json!("2025-01-01T00:00:00Z")),
            interaction(2, "id_gen", "generate", json!({"Ok": "second"})),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);
        assert_eq!(replayer.remaining(), 3);

        // Clock is read out of order relative to the recording.
        assert_eq!(replayer.next_interaction("clock", "now").seq, 1);
        assert_eq!(replayer.next_interaction("id_gen", "generate").output, json!({"Ok": "first"}));
        assert_eq!(replayer.next_interaction("id_gen", "generate").output, json!({"Ok": "second"}));
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_pair_panics() {
        let cassette = make_cassette(vec![interaction(0, "clock", "now", json!("x"))]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("clock", "now");
        let _ = replayer.next_interaction("clock", "now");
    }

    #[test]
    #[should_panic(expected = "clock::now (1)")]
    fn panic_lists_remaining_pairs() {
        let cassette = make_cassette(vec![interaction(0, "clock", "now", json!("x"))]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("shell", "run");
    }
}
