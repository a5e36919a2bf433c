//! Per-round gesture judging.
//!
//! A [`Round`] is a step machine fed one observed colour per sampled frame,
//! each tagged with the time elapsed since the round began. It holds no clock
//! and does no I/O, so a live loop and a scripted test drive it identically.
pub mod phase;
pub use phase::*;

pub mod round;
pub use round::*;

pub mod streak;
pub use streak::*;
