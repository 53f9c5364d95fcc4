//! Property tests: every identifier the generator accepts satisfies its kind's format.

use std::collections::VecDeque;
use std::sync::Mutex;

use proptest::prelude::*;
use strongrandom::ports::EntropySource;
use strongrandom::{Generator, GeneratorError, IdentifierKind};

/// Serves a fixed byte stream, failing once it cannot fill a request.
struct StreamEntropy(Mutex<VecDeque<u8>>);

impl EntropySource for StreamEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        let mut bytes = self.0.lock().unwrap();
        if bytes.len() < buf.len() {
            return Err(GeneratorError::RandomSourceUnavailable("stream exhausted".into()));
        }
        for slot in buf.iter_mut() {
            *slot = bytes.pop_front().unwrap();
        }
        Ok(())
    }
}

fn generator(bytes: Vec<u8>) -> Generator {
    Generator::new(Box::new(StreamEntropy(Mutex::new(bytes.into()))))
}

fn arb_kind() -> impl Strategy<Value = IdentifierKind> {
    prop_oneof![
        Just(IdentifierKind::AlphanumericFixed10),
        Just(IdentifierKind::StandardGuid),
        Just(IdentifierKind::UppercaseGuid),
        Just(IdentifierKind::HexToken8),
    ]
}

fn satisfies(kind: IdentifierKind, id: &str) -> bool {
    match kind {
        IdentifierKind::AlphanumericFixed10 => {
            id.len() == 10
                && id.bytes().all(|b| b.is_ascii_alphanumeric())
                && id.bytes().any(|b| b.is_ascii_digit())
                && id.bytes().any(|b| b.is_ascii_lowercase())
                && id.bytes().any(|b| b.is_ascii_uppercase())
        }
        IdentifierKind::HexToken8 => id.strip_prefix("0x").is_some_and(|hex| {
            hex.len() == 8
                && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
                && hex.bytes().any(|b| b.is_ascii_digit())
                && hex.bytes().any(|b| matches!(b, b'a'..=b'f'))
        }),
        IdentifierKind::StandardGuid | IdentifierKind::UppercaseGuid => {
            let upper = kind == IdentifierKind::UppercaseGuid;
            let groups: Vec<&str> = id.split('-').collect();
            groups.iter().map(|g| g.len()).eq([8, 4, 4, 4, 12])
                && id.bytes().filter(|&b| b != b'-').all(|b| {
                    b.is_ascii_digit()
                        || if upper { matches!(b, b'A'..=b'F') } else { matches!(b, b'a'..=b'f') }
                })
        }
    }
}

proptest! {
    #[test]
    fn accepted_output_satisfies_kind(
        kind in arb_kind(),
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        match generator(bytes).generate(kind) {
            Ok(id) => prop_assert!(satisfies(kind, &id), "{kind} produced {id:?}"),
            Err(e) => prop_assert!(matches!(e, GeneratorError::RandomSourceUnavailable(_))),
        }
    }

    #[test]
    fn generation_is_deterministic_for_a_given_stream(
        kind in arb_kind(),
        bytes in proptest::collection::vec(any::<u8>(), 16..256),
    ) {
        let first = generator(bytes.clone()).generate(kind);
        let second = generator(bytes).generate(kind);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parse_never_yields_an_unlisted_kind(selector in "\\PC{0,24}") {
        match selector.parse::<IdentifierKind>() {
            Ok(kind) => prop_assert!(IdentifierKind::ALL.contains(&kind)),
            Err(e) => prop_assert_eq!(e, GeneratorError::InvalidKind(selector.clone())),
        }
    }
}
