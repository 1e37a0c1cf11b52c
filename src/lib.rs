//! Pogo Hero - a side-scrolling pogo-stick platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, spring, collisions, run status)
//! - `tuning`: Data-driven physics constants
//! - `platform`: Host adapters (key state, frame clock)
//! - `session`: One-update-per-frame driver producing render views
//! - `script`: Scripted input timelines for headless runs

pub mod error;
pub mod platform;
pub mod script;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use session::{FrameView, Session};
pub use tuning::Tuning;

/// Default game constants. `Tuning::default()` mirrors these.
pub mod consts {
    use std::f32::consts::PI;

    /// Largest time step a single frame may advance (40 ms)
    pub const MAX_DT: f32 = 0.04;

    /// Viewport dimensions (pixels)
    pub const VIEW_WIDTH: f32 = 960.0;
    pub const VIEW_HEIGHT: f32 = 540.0;
    /// How far below the viewport the hero may drop before the run is lost
    pub const FALL_MARGIN: f32 = 240.0;
    /// Rightmost camera offset
    pub const CAMERA_MAX_X: f32 = 99_999.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1600.0;
    /// Per-tick horizontal velocity decay
    pub const AIR_RESISTANCE: f32 = 0.98;
    /// Per-tick angular velocity decay
    pub const ANGLE_DAMPING: f32 = 0.88;
    /// Maximum tilt either side of vertical
    pub const MAX_ANGLE: f32 = PI / 2.2;
    /// Tilt the hero spawns with
    pub const SPAWN_ANGLE: f32 = -0.15;

    /// Steering: angular acceleration and lateral thrust while a tilt key is held
    pub const STEER_TORQUE: f32 = 5.0;
    pub const STEER_THRUST: f32 = 560.0;

    /// Pogo stick
    pub const POGO_LENGTH: f32 = 82.0;
    pub const POGO_MASS: f32 = 56.0;
    pub const POGO_STIFFNESS: f32 = 2800.0;
    pub const POGO_MAX_COMPRESSION: f32 = 48.0;
    /// Compression gained per second while charging
    pub const CHARGE_RATE: f32 = 60.0;
    /// Compression lost per second while idle
    pub const COMPRESSION_DECAY: f32 = 20.0;
    /// Fraction of stored spring energy converted on release
    pub const RELEASE_EFFICIENCY: f32 = 0.6;
    /// Torque kick on release, scaled by tilt
    pub const RELEASE_TORQUE: f32 = 3.0;
    /// Extra depth below a platform's bottom edge that still counts as tip contact
    pub const GROUND_TOLERANCE: f32 = 2.0;
    /// Probe values below this count as standing on the ground
    pub const GROUND_THRESHOLD: f32 = 0.5;
    /// Share of landing speed turned into a sideways kick
    pub const LANDING_KICK: f32 = 0.15;

    /// Energy (jump power multiplier)
    pub const ENERGY_START: f32 = 1.0;
    pub const ENERGY_MAX: f32 = 1.2;
    pub const ENERGY_FLOOR: f32 = 0.4;
    pub const ENERGY_CHARGE_RATE: f32 = 0.9;
    pub const ENERGY_RELEASE_COST: f32 = 0.3;
    pub const ENERGY_AIR_DRAIN: f32 = 0.6;

    /// Torso collision
    pub const HEALTH_START: f32 = 100.0;
    pub const TORSO_RADIUS: f32 = 18.0;
    pub const TORSO_SKIN: f32 = 2.0;
    pub const DAMAGE_PER_SPEED: f32 = 0.18;
    pub const MAX_HIT_DAMAGE: f32 = 40.0;
    /// Normal impact speed that is always lethal
    pub const LETHAL_IMPACT: f32 = 560.0;

    /// Impact magnitudes used to seed the ragdoll for non-collision failures
    pub const HAZARD_IMPACT: f32 = 900.0;
    pub const FALL_IMPACT: f32 = 800.0;

    /// Ragdoll particles
    pub const RAGDOLL_MIN_KICK: f32 = 200.0;
    pub const RAGDOLL_KICK_SCALE: f32 = 0.7;
    pub const RAGDOLL_DRAG: f32 = 0.998;
    pub const RAGDOLL_RESTITUTION: f32 = 0.35;
    pub const RAGDOLL_SKIN: f32 = 1.0;
}
