//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - The host supplies dt, no clocks are read here
//! - No randomness
//! - Platforms are always scanned in authored order
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod integrator;
pub mod pogo;
pub mod ragdoll;
pub mod state;
pub mod tick;

pub use collision::{Response, TorsoHit, collide_torso, resolve_circle};
pub use geometry::{Level, PlatformHit, Rect, closest_point_on_rect};
pub use pogo::{Pogo, ground_probe};
pub use ragdoll::RagdollPart;
pub use state::{CrashCause, Hero, Hud, RunStatus, SimEvent, SimState, StatusKind};
pub use tick::{TickInput, restart, tick};
