//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generator core and the
//! outside world (entropy, time, shell, identifier generation).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod entropy;
pub mod id_gen;
pub mod shell;

pub use clock::Clock;
pub use entropy::EntropySource;
pub use id_gen::IdGenerator;
pub use shell::{ShellExecutor, ShellOutput};
