//! Simulation state and core types
//!
//! Everything a step reads or writes lives in [`SimState`]; the level and
//! tuning are passed alongside and never change during a run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Level;
use super::pogo::Pogo;
use super::ragdoll::RagdollPart;
use crate::tuning::Tuning;

/// The rider: a point mass with an orientation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Tilt from vertical (radians, positive leans the stick tip right)
    pub angle: f32,
    pub angular_vel: f32,
    /// Jump power multiplier, within [0, energy_max]
    pub energy: f32,
    pub health: f32,
    /// Furthest horizontal progress from spawn
    pub distance: f32,
    /// Seconds spent alive this run
    pub time: f32,
}

impl Hero {
    pub fn spawn(level: &Level, tuning: &Tuning) -> Self {
        Self {
            pos: level.spawn,
            vel: Vec2::ZERO,
            angle: tuning.spawn_angle,
            angular_vel: 0.0,
            energy: tuning.energy_start,
            health: tuning.health_start,
            distance: 0.0,
            time: 0.0,
        }
    }

    /// Unit vector from the body down the stick
    #[inline]
    pub fn stick_dir(&self) -> Vec2 {
        Vec2::new(self.angle.sin(), self.angle.cos())
    }
}

/// Why a run ended in a crash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Torso hit a platform too hard, or ran out of health
    Impact,
    /// Body or stick tip touched a hazard
    Hazard,
    /// Fell below the course
    OutOfBounds,
}

/// Run status. Ragdoll particles only exist while crashed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunStatus {
    Alive,
    Ragdoll {
        parts: [RagdollPart; 3],
        cause: CrashCause,
    },
    Finished {
        /// Run time when the finish zone was reached
        time: f32,
    },
}

/// Coarse status for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    Alive,
    Ragdoll,
    Finished,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    Restarted,
    Damaged { amount: f32, health: f32 },
    Crashed { cause: CrashCause, impact: f32 },
    Finished { time: f32 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub hero: Hero,
    pub pogo: Pogo,
    pub status: RunStatus,
    /// Horizontal camera offset, never negative
    pub camera_x: f32,
}

impl SimState {
    /// Fresh run at the level's spawn point
    pub fn new(level: &Level, tuning: &Tuning) -> Self {
        Self {
            hero: Hero::spawn(level, tuning),
            pogo: Pogo::new(tuning),
            status: RunStatus::Alive,
            camera_x: 0.0,
        }
    }

    pub fn status_kind(&self) -> StatusKind {
        match self.status {
            RunStatus::Alive => StatusKind::Alive,
            RunStatus::Ragdoll { .. } => StatusKind::Ragdoll,
            RunStatus::Finished { .. } => StatusKind::Finished,
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.status, RunStatus::Alive)
    }

    pub fn finish_time(&self) -> Option<f32> {
        match self.status {
            RunStatus::Finished { time } => Some(time),
            _ => None,
        }
    }

    /// Ragdoll particles (empty unless crashed)
    pub fn ragdoll_parts(&self) -> &[RagdollPart] {
        match &self.status {
            RunStatus::Ragdoll { parts, .. } => parts.as_slice(),
            _ => &[],
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            health: (self.hero.health as i32).max(0),
            energy: (self.hero.energy * 100.0) as u32,
            distance: self.hero.distance.floor() as u32,
            status: self.status_kind(),
            finish_time: self.finish_time(),
        }
    }
}

/// Heads-up display values, already rounded for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub health: i32,
    pub energy: u32,
    pub distance: u32,
    pub status: StatusKind,
    pub finish_time: Option<f32>,
}

impl Hud {
    /// Banner line for the current status, if any
    pub fn banner(&self) -> Option<String> {
        match (self.status, self.finish_time) {
            (StatusKind::Finished, Some(t)) => Some(format!("Victory! {t:.2}s")),
            (StatusKind::Ragdoll, _) => Some("You crashed!".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_at_spawn() {
        let level = Level::default();
        let tuning = Tuning::default();
        let state = SimState::new(&level, &tuning);
        assert_eq!(state.hero.pos, level.spawn);
        assert_eq!(state.hero.vel, Vec2::ZERO);
        assert_eq!(state.hero.angle, -0.15);
        assert_eq!(state.pogo.compression, 0.0);
        assert!(state.is_alive());
        assert!(state.ragdoll_parts().is_empty());
        assert_eq!(state.finish_time(), None);
    }

    #[test]
    fn test_hud_rounding() {
        let level = Level::default();
        let tuning = Tuning::default();
        let mut state = SimState::new(&level, &tuning);
        state.hero.health = -12.5;
        state.hero.energy = 0.999;
        state.hero.distance = 41.9;
        let hud = state.hud();
        assert_eq!(hud.health, 0);
        assert_eq!(hud.energy, 99);
        assert_eq!(hud.distance, 41);
        assert_eq!(hud.banner(), None);
    }

    #[test]
    fn test_banner() {
        let hud = Hud {
            health: 80,
            energy: 100,
            distance: 2500,
            status: StatusKind::Finished,
            finish_time: Some(12.5),
        };
        assert_eq!(hud.banner().as_deref(), Some("Victory! 12.50s"));
    }
}
