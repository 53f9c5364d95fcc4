//! Live adapters for real external interactions.

pub mod clock;
pub mod entropy;
pub mod shell;

pub use clock::LiveClock;
pub use entropy::OsEntropy;
pub use shell::LiveShellExecutor;
