//! Edge-detecting poll loop
//!
//! The control core: a tight busy-wait that samples the pin, detects
//! level transitions, and posts exactly one key event per transition.
//!
//! ## Module Structure
//! - `pure.rs`: the two-state edge detector
//! - `pipelines.rs`: the loop wiring pin to keyboard

mod pipelines;
mod pure;

pub use pipelines::run;
pub use pure::{EdgeDetector, KeyAction};
