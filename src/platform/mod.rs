//! Platform abstraction layer
//!
//! Host-side glue between the outside world and the simulation:
//! - Input events -> per-tick input snapshots
//! - Frame timestamps -> clamped time steps

pub mod input;
pub mod time;

pub use input::{InputAdapter, Key};
pub use time::FrameClock;
