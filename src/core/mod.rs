//! Core building blocks for the focus engine.
//!
//! The engine is driven by an explicit one-second tick rather than by
//! wall-clock callbacks, so everything here is deterministic: a one-shot
//! scheduler keyed to a logical second counter, a date source that can be
//! replaced in tests, and a seedable break-delay sampler.

pub mod clock;
pub mod random;
pub mod scheduler;

pub use clock::{Clock, SystemClock};
pub use random::BreakDelays;
pub use scheduler::{Scheduler, TimerHandle};
