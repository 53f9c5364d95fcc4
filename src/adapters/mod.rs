//! Adapter implementations of the port traits.
//!
//! `live` talks to the real system, `recording` wraps another adapter and
//! writes a cassette, `replaying` serves a cassette back.

pub mod live;
pub mod recording;
pub mod replaying;
