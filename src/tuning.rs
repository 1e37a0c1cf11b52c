//! Physics tuning
//!
//! Every constant the simulation reads lives here so runs can be retuned from
//! a JSON file without recompiling. Missing keys fall back to [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Runtime-tunable physics constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Time ===
    /// Upper bound on a single step's dt (seconds)
    pub max_dt: f32,

    // === View ===
    /// Viewport width, used to keep the hero centred
    pub view_width: f32,
    pub camera_max_x: f32,

    // === Body ===
    pub gravity: f32,
    pub air_resistance: f32,
    pub angle_damping: f32,
    pub max_angle: f32,
    pub spawn_angle: f32,
    pub steer_torque: f32,
    pub steer_thrust: f32,

    // === Pogo stick ===
    pub pogo_length: f32,
    pub pogo_mass: f32,
    pub pogo_stiffness: f32,
    pub max_compression: f32,
    pub charge_rate: f32,
    pub compression_decay: f32,
    pub release_efficiency: f32,
    pub release_torque: f32,
    pub ground_tolerance: f32,
    pub ground_threshold: f32,
    pub landing_kick: f32,

    // === Energy ===
    pub energy_start: f32,
    pub energy_max: f32,
    pub energy_floor: f32,
    pub energy_charge_rate: f32,
    pub energy_release_cost: f32,
    pub energy_air_drain: f32,

    // === Torso ===
    pub health_start: f32,
    pub torso_radius: f32,
    pub torso_skin: f32,
    pub damage_per_speed: f32,
    pub max_hit_damage: f32,
    pub lethal_impact: f32,
    pub hazard_impact: f32,
    pub fall_impact: f32,

    // === Ragdoll ===
    pub ragdoll_min_kick: f32,
    pub ragdoll_kick_scale: f32,
    pub ragdoll_drag: f32,
    pub ragdoll_restitution: f32,
    pub ragdoll_skin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_dt: MAX_DT,

            view_width: VIEW_WIDTH,
            camera_max_x: CAMERA_MAX_X,

            gravity: GRAVITY,
            air_resistance: AIR_RESISTANCE,
            angle_damping: ANGLE_DAMPING,
            max_angle: MAX_ANGLE,
            spawn_angle: SPAWN_ANGLE,
            steer_torque: STEER_TORQUE,
            steer_thrust: STEER_THRUST,

            pogo_length: POGO_LENGTH,
            pogo_mass: POGO_MASS,
            pogo_stiffness: POGO_STIFFNESS,
            max_compression: POGO_MAX_COMPRESSION,
            charge_rate: CHARGE_RATE,
            compression_decay: COMPRESSION_DECAY,
            release_efficiency: RELEASE_EFFICIENCY,
            release_torque: RELEASE_TORQUE,
            ground_tolerance: GROUND_TOLERANCE,
            ground_threshold: GROUND_THRESHOLD,
            landing_kick: LANDING_KICK,

            energy_start: ENERGY_START,
            energy_max: ENERGY_MAX,
            energy_floor: ENERGY_FLOOR,
            energy_charge_rate: ENERGY_CHARGE_RATE,
            energy_release_cost: ENERGY_RELEASE_COST,
            energy_air_drain: ENERGY_AIR_DRAIN,

            health_start: HEALTH_START,
            torso_radius: TORSO_RADIUS,
            torso_skin: TORSO_SKIN,
            damage_per_speed: DAMAGE_PER_SPEED,
            max_hit_damage: MAX_HIT_DAMAGE,
            lethal_impact: LETHAL_IMPACT,
            hazard_impact: HAZARD_IMPACT,
            fall_impact: FALL_IMPACT,

            ragdoll_min_kick: RAGDOLL_MIN_KICK,
            ragdoll_kick_scale: RAGDOLL_KICK_SCALE,
            ragdoll_drag: RAGDOLL_DRAG,
            ragdoll_restitution: RAGDOLL_RESTITUTION,
            ragdoll_skin: RAGDOLL_SKIN,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning: Self = serde_json::from_str(&json).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break the simulation's bounds
    pub fn validate(&self) -> Result<()> {
        check("max_dt", self.max_dt, self.max_dt > 0.0, "> 0")?;
        check(
            "max_angle",
            self.max_angle,
            self.max_angle > 0.0 && self.max_angle < std::f32::consts::FRAC_PI_2,
            "within (0, pi/2)",
        )?;
        check(
            "spawn_angle",
            self.spawn_angle,
            self.spawn_angle.abs() <= self.max_angle,
            "within +/- max_angle",
        )?;
        check("pogo_mass", self.pogo_mass, self.pogo_mass > 0.0, "> 0")?;
        check(
            "max_compression",
            self.max_compression,
            self.max_compression > 0.0,
            "> 0",
        )?;
        check("energy_max", self.energy_max, self.energy_max > 0.0, "> 0")?;
        check(
            "energy_floor",
            self.energy_floor,
            (0.0..=self.energy_max).contains(&self.energy_floor),
            "within [0, energy_max]",
        )?;
        check(
            "energy_start",
            self.energy_start,
            (0.0..=self.energy_max).contains(&self.energy_start),
            "within [0, energy_max]",
        )?;
        check(
            "ragdoll_restitution",
            self.ragdoll_restitution,
            (0.0..=1.0).contains(&self.ragdoll_restitution),
            "within [0, 1]",
        )?;
        check(
            "torso_radius",
            self.torso_radius,
            self.torso_radius > 0.0,
            "> 0",
        )?;
        check(
            "camera_max_x",
            self.camera_max_x,
            self.camera_max_x >= 0.0,
            ">= 0",
        )?;
        Ok(())
    }
}

fn check(name: &'static str, value: f32, ok: bool, expected: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidTuning {
            name,
            value,
            expected,
        })
    }
}
