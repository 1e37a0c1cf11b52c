//! Pogo stick spring model
//!
//! The stick hangs from the body along its tilt. Holding charge winds the
//! spring; letting go (or the tip sinking into a platform) turns the stored
//! compression into an impulse along the stick, scaled by the rider's energy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Level;
use super::state::Hero;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Spring state plus the stick's fixed properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pogo {
    pub length: f32,
    pub mass: f32,
    pub stiffness: f32,
    /// Stored compression, within [0, max_compression]
    pub compression: f32,
    pub max_compression: f32,
}

impl Pogo {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            length: tuning.pogo_length,
            mass: tuning.pogo_mass,
            stiffness: tuning.pogo_stiffness,
            compression: 0.0,
            max_compression: tuning.max_compression,
        }
    }

    /// World position of the stick tip
    #[inline]
    pub fn tip(&self, hero: &Hero) -> Vec2 {
        hero.pos + hero.stick_dir() * self.length
    }
}

/// Signed depth of the tip below the surface of the platforms it touches.
///
/// A platform qualifies when the tip lies within its horizontal span and
/// between its top and `tolerance` past its bottom. Each qualifying platform
/// gives `top - tip.y` (zero or negative); the largest wins and is clamped to
/// `[-max_compression, 0]`. `None` when the tip touches nothing.
pub fn ground_probe(tip: Vec2, level: &Level, max_compression: f32, tolerance: f32) -> Option<f32> {
    level
        .platforms
        .iter()
        .filter(|p| {
            tip.x >= p.x && tip.x <= p.right() && tip.y >= p.y && tip.y <= p.bottom() + tolerance
        })
        .map(|p| p.y - tip.y)
        .reduce(f32::max)
        .map(|depth| depth.clamp(-max_compression, 0.0))
}

/// What the spring did this step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PogoStep {
    /// Tip position the ground probe used (the pre-move pose)
    pub tip: Vec2,
    pub on_ground: bool,
    /// Release force, if the spring fired
    pub released: Option<f32>,
}

/// Run one step of the spring model against the current pose
pub fn step_pogo(
    hero: &mut Hero,
    pogo: &mut Pogo,
    input: &TickInput,
    dt: f32,
    level: &Level,
    tuning: &Tuning,
) -> PogoStep {
    let tip = pogo.tip(hero);
    let probe = ground_probe(tip, level, pogo.max_compression, tuning.ground_tolerance);
    let on_ground = probe.is_some_and(|depth| depth < tuning.ground_threshold);
    let penetration = probe.unwrap_or(0.0);

    // Landing soaks up the fall and turns part of it into a sideways hop
    if on_ground && hero.vel.y > 0.0 {
        hero.vel.x += hero.angle.sin() * hero.vel.y.abs() * tuning.landing_kick;
        hero.vel.y = 0.0;
    }

    let mut released = None;
    if input.charge {
        pogo.compression =
            (pogo.compression + tuning.charge_rate * dt).clamp(0.0, pogo.max_compression);
        hero.energy =
            (hero.energy + tuning.energy_charge_rate * dt).clamp(0.0, tuning.energy_max);
    } else if pogo.compression > 0.0 || penetration < 0.0 {
        let force = (pogo.compression + penetration.abs())
            * pogo.stiffness
            * dt
            * tuning.release_efficiency
            * hero.energy;
        let (sin, cos) = hero.angle.sin_cos();
        hero.vel.y -= cos * (force / pogo.mass);
        hero.vel.x -= sin * (force / pogo.mass);
        hero.angular_vel += sin * tuning.release_torque * dt * hero.energy;
        pogo.compression = 0.0;
        hero.energy =
            (hero.energy - tuning.energy_release_cost).clamp(tuning.energy_floor, tuning.energy_max);
        released = Some(force);
    } else {
        pogo.compression =
            (pogo.compression - tuning.compression_decay * dt).clamp(0.0, pogo.max_compression);
    }

    if !on_ground {
        hero.energy = (hero.energy - tuning.energy_air_drain * dt).clamp(0.0, tuning.energy_max);
    }

    PogoStep {
        tip,
        on_ground,
        released,
    }
}
